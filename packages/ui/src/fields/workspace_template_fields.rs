use dioxus::prelude::*;
use store::WorkspaceTemplate;

use crate::icons::FaPlus;
use crate::Icon;

/// The repeatable workspace list: one select per entry and an append button.
/// Entries cannot be removed.
#[component]
pub fn WorkspaceTemplateFields(
    id_prefix: String,
    entries: Vec<String>,
    /// Per-entry errors, indexed like `entries`.
    errors: Vec<Option<String>>,
    /// List-level error from the last submit.
    list_error: Option<String>,
    onchange: EventHandler<(usize, String)>,
    onappend: EventHandler<()>,
) -> Element {
    let rows = entries.iter().enumerate().map(move |(index, value)| {
        let id = format!("{id_prefix}-workspace-{index}");
        let number = index + 1;
        let error = errors.get(index).cloned().flatten();
        let current = value.clone();
        rsx! {
            div {
                key: "{id}",
                class: if error.is_some() { "field field--error" } else { "field" },
                label { r#for: "{id}", "Workspace template * {number}" }
                select {
                    id: "{id}",
                    value: "{current}",
                    onchange: move |evt: FormEvent| onchange.call((index, evt.value())),
                    option { value: "", disabled: true, selected: current.is_empty(), "Select a template" }
                    for template in WorkspaceTemplate::ALL {
                        option {
                            key: "{template}",
                            value: "{template}",
                            selected: current == template.as_str(),
                            "{template}"
                        }
                    }
                }
                if let Some(err) = &error {
                    span { class: "field-error", "{err}" }
                }
            }
        }
    });

    rsx! {
        div {
            class: "workspace-fields",
            {rows}
            button {
                r#type: "button",
                class: "secondary",
                onclick: move |_| onappend.call(()),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " Add Another Workspace"
            }
            if let Some(err) = &list_error {
                p { class: "field-error", "{err}" }
            }
        }
    }
}
