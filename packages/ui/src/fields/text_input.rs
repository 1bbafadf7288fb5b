use dioxus::prelude::*;

/// Labelled single-line input.
#[component]
pub fn TextInput(
    id: String,
    label: String,
    value: String,
    error: Option<String>,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] input_type: String,
) -> Element {
    rsx! {
        div {
            class: if error.is_some() { "field field--error" } else { "field" },
            label { r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                r#type: "{input_type}",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(err) = &error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}
