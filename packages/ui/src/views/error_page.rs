use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shown for unknown routes and for records that do not exist.
#[component]
pub fn ErrorView(on_home: EventHandler<()>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-placeholder",
            h2 { "Oops!" }
            p { "Sorry, the page you are looking for does not exist." }
            button {
                class: "primary",
                onclick: move |_| on_home.call(()),
                "Go home"
            }
        }
    }
}
