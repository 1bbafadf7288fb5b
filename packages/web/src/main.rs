use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use store::RecordId;
use views::{
    AddPatients, ErrorPage, NavLayout, NotFound, PatientDetail, Patients, StudentDetail, Students,
};

mod records;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(NavLayout)]
        #[route("/")]
        Root {},
        #[route("/patients")]
        Patients {},
        #[route("/patients/new")]
        AddPatients {},
        #[route("/patients/:id")]
        PatientDetail { id: RecordId },
        #[route("/students")]
        Students {},
        #[route("/students/:id")]
        StudentDetail { id: RecordId },
        #[route("/error")]
        ErrorPage {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(records::Records::load);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::FORMS_CSS }

        Router::<Route> {}
    }
}

/// Redirect `/` to `/patients`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Patients {});
    rsx! {}
}
