use dioxus::prelude::*;

/// Browser date picker. `value` and `max` are `YYYY-MM-DD`.
#[component]
pub fn BirthDateInput(
    id: String,
    value: String,
    max: String,
    error: Option<String>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: if error.is_some() { "field field--error" } else { "field" },
            label { r#for: "{id}", "Date of birth *" }
            input {
                id: "{id}",
                r#type: "date",
                max: "{max}",
                value: "{value}",
                onchange: move |evt: FormEvent| onchange.call(evt.value()),
            }
            if let Some(err) = &error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}
