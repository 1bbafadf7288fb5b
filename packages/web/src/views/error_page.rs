use dioxus::prelude::*;
use ui::views::ErrorView;

use crate::Route;

#[component]
pub fn ErrorPage() -> Element {
    let nav = use_navigator();
    rsx! {
        ErrorView {
            on_home: move |_| {
                nav.push(Route::Patients {});
            },
        }
    }
}

/// Any path no other route matches.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::warn!("no route for /{}", segments.join("/"));
    rsx! {
        ErrorPage {}
    }
}
