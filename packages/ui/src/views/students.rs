use dioxus::prelude::*;
use store::{MemoryStore, RecordId, RecordStore, Student};

use crate::StudentForm;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Student table with the add form beside it. The table refreshes after
/// every added student.
#[component]
pub fn StudentsView(store: MemoryStore<Student>, on_select: EventHandler<RecordId>) -> Element {
    let mut students = use_signal({
        let store = store.clone();
        move || store.list()
    });

    let rows = students().into_iter().map(move |stored| {
        let id = stored.id;
        let name = stored.record.name;
        rsx! {
            tr {
                key: "{id}",
                td { "{id}" }
                td { "{name}" }
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

    let refresh_store = store.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "records records--split",
            div {
                h1 { "Students" }
                table {
                    class: "record-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Name" }
                            th { "Details" }
                        }
                    }
                    tbody { {rows} }
                }
            }
            StudentForm {
                store: store,
                on_added: move |_| students.set(refresh_store.list()),
            }
        }
    }
}
