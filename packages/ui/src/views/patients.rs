use dioxus::prelude::*;
use store::{MemoryStore, Patient, RecordId, RecordStore};

use crate::icons::FaPlus;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Table of every stored patient, in insertion order.
#[component]
pub fn PatientsView(
    store: MemoryStore<Patient>,
    on_select: EventHandler<RecordId>,
    on_add: EventHandler<()>,
) -> Element {
    let patients = store.list();

    let rows = patients.into_iter().map(move |stored| {
        let id = stored.id;
        let name = stored.record.full_name();
        let gender = stored.record.gender;
        rsx! {
            tr {
                key: "{id}",
                td { "{id}" }
                td { "{name}" }
                td { "{gender}" }
                td {
                    button {
                        class: "details-btn",
                        onclick: move |_| on_select.call(id),
                        "Read More.."
                    }
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "records",
            div {
                class: "page-header",
                h1 { "Patients" }
                button {
                    class: "primary",
                    onclick: move |_| on_add.call(()),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add Patients"
                }
            }
            table {
                class: "record-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { "Gender" }
                        th { "Details" }
                    }
                }
                tbody { {rows} }
            }
        }
    }
}
