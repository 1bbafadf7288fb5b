use dioxus::prelude::*;
use store::Disorder;

/// One checkbox per disorder option. Clicking a box toggles that option.
#[component]
pub fn DisordersCheckboxGroup(
    name: String,
    selected: Vec<Disorder>,
    error: Option<String>,
    ontoggle: EventHandler<Disorder>,
) -> Element {
    rsx! {
        fieldset {
            class: if error.is_some() { "choice-group field--error" } else { "choice-group" },
            legend { "Disorders *" }
            div {
                class: "choice-row",
                for option in Disorder::ALL {
                    label {
                        key: "{option}",
                        class: if selected.contains(&option) { "choice choice--selected" } else { "choice" },
                        input {
                            r#type: "checkbox",
                            name: "{name}",
                            value: "{option}",
                            checked: selected.contains(&option),
                            onchange: move |_| ontoggle.call(option),
                        }
                        "{option}"
                    }
                }
            }
            if let Some(err) = &error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}
