use dioxus::prelude::*;
use store::RecordId;
use ui::views::{StudentDetailView, StudentsView};

use crate::records::use_records;
use crate::Route;

#[component]
pub fn Students() -> Element {
    let records = use_records();
    let nav = use_navigator();

    rsx! {
        StudentsView {
            store: records.students,
            on_select: move |id: RecordId| {
                nav.push(Route::StudentDetail { id });
            },
        }
    }
}

#[component]
pub fn StudentDetail(id: RecordId) -> Element {
    let records = use_records();
    let nav = use_navigator();

    rsx! {
        StudentDetailView {
            store: records.students,
            id,
            on_missing: move |_| {
                nav.replace(Route::ErrorPage {});
            },
            on_back: move |_| {
                nav.push(Route::Students {});
            },
        }
    }
}
