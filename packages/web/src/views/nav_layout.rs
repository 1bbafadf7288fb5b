use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

#[component]
pub fn NavLayout() -> Element {
    rsx! {
        Navbar {
            title: "Patient Intake".to_string(),
            Link { to: Route::Patients {}, "Patients" }
            Link { to: Route::Students {}, "Students" }
        }
        Outlet::<Route> {}
    }
}
