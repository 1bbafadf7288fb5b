use dioxus::prelude::*;
use store::RecordId;
use ui::views::{AddPatientsView, PatientDetailView, PatientsView};

use crate::records::use_records;
use crate::Route;

#[component]
pub fn Patients() -> Element {
    let records = use_records();
    let nav = use_navigator();

    rsx! {
        PatientsView {
            store: records.patients,
            on_select: move |id: RecordId| {
                nav.push(Route::PatientDetail { id });
            },
            on_add: move |_| {
                nav.push(Route::AddPatients {});
            },
        }
    }
}

#[component]
pub fn AddPatients() -> Element {
    let records = use_records();
    let nav = use_navigator();

    rsx! {
        AddPatientsView {
            store: records.patients,
            config: records.config,
            on_done: move |_| {
                nav.push(Route::Patients {});
            },
            on_cancel: move |_| {
                nav.push(Route::Patients {});
            },
        }
    }
}

#[component]
pub fn PatientDetail(id: RecordId) -> Element {
    let records = use_records();
    let nav = use_navigator();

    rsx! {
        PatientDetailView {
            store: records.patients,
            id,
            on_missing: move |_| {
                nav.replace(Route::ErrorPage {});
            },
            on_back: move |_| {
                nav.push(Route::Patients {});
            },
        }
    }
}
