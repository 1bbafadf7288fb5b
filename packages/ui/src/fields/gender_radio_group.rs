use dioxus::prelude::*;
use store::Gender;

#[component]
pub fn GenderRadioGroup(
    /// Radio group name; must be unique per form section.
    name: String,
    selected: Option<Gender>,
    error: Option<String>,
    onchange: EventHandler<Gender>,
) -> Element {
    rsx! {
        fieldset {
            class: if error.is_some() { "choice-group field--error" } else { "choice-group" },
            legend { "Gender *" }
            div {
                class: "choice-row",
                for option in Gender::ALL {
                    label {
                        key: "{option}",
                        class: if selected == Some(option) { "choice choice--selected" } else { "choice" },
                        input {
                            r#type: "radio",
                            name: "{name}",
                            value: "{option}",
                            checked: selected == Some(option),
                            onchange: move |_| onchange.call(option),
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
