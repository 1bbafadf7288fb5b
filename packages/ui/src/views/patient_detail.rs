use dioxus::prelude::*;
use store::{MemoryStore, Patient, RecordId, RecordStore};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Read-only view of one patient. An unknown id calls `on_missing`.
#[component]
pub fn PatientDetailView(
    store: MemoryStore<Patient>,
    id: RecordId,
    on_missing: EventHandler<()>,
    on_back: EventHandler<()>,
) -> Element {
    let Some(stored) = store.get(id) else {
        tracing::warn!(%id, "patient not found");
        on_missing.call(());
        return rsx! {};
    };
    let patient = stored.record;
    let name = patient.full_name();
    let gender = patient.gender;
    let birth_date = patient.birth_date_iso();
    let disorders = patient.disorder_labels();
    let workspaces = patient.workspace_labels();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "record-details",
            h1 { "Patient Details" }
            table {
                class: "record-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { "Gender" }
                        th { "Birth Date" }
                        th { "Disorders" }
                        th { "Workspaces" }
                    }
                }
                tbody {
                    tr {
                        td { "{id}" }
                        td { "{name}" }
                        td { "{gender}" }
                        td { "{birth_date}" }
                        td { "{disorders}" }
                        td { "{workspaces}" }
                    }
                }
            }
            button {
                class: "text back-link",
                onclick: move |_| on_back.call(()),
                "Back to Patients"
            }
        }
    }
}
