use dioxus::prelude::*;
use store::{MemoryStore, RecordId, RecordStore, Student};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn StudentDetailView(
    store: MemoryStore<Student>,
    id: RecordId,
    on_missing: EventHandler<()>,
    on_back: EventHandler<()>,
) -> Element {
    let Some(stored) = store.get(id) else {
        tracing::warn!(%id, "student not found");
        on_missing.call(());
        return rsx! {};
    };
    let Student { name, age, major } = stored.record;

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "record-details",
            h1 { "Student Details" }
            table {
                class: "record-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { "Age" }
                        th { "Major" }
                    }
                }
                tbody {
                    tr {
                        td { "{id}" }
                        td { "{name}" }
                        td { "{age}" }
                        td { "{major}" }
                    }
                }
            }
            button {
                class: "text back-link",
                onclick: move |_| on_back.call(()),
                "Back to Students"
            }
        }
    }
}
