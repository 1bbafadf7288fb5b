use dioxus::prelude::*;
use forms::{sections_confirmation, submit_sections, PatientDraft, PatientEdit, Rules, Section, SectionedForm};
use store::{FormsConfig, MemoryStore, Patient};

use crate::fields::PatientSection;
use crate::icons::FaArrowLeft;
use crate::{show_confirmation, Icon};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Dual-section intake form: a left and a right patient, saved together.
///
/// On a successful save both patients are appended to `store`, the
/// confirmation is shown (when configured) and `on_done` is called. A rejected
/// save leaves the form on screen with its annotations.
#[component]
pub fn AddPatientsView(
    store: MemoryStore<Patient>,
    config: FormsConfig,
    /// Called after both patients were stored — navigate back to the list.
    on_done: EventHandler<()>,
    /// Called when the user abandons the form.
    on_cancel: EventHandler<()>,
) -> Element {
    let rules = use_signal(|| Rules::local(&config.validation));
    let mut intake = use_signal(SectionedForm::<PatientDraft>::new);
    let confirm = config.submit.confirm;
    let today = rules.read().today.format("%Y-%m-%d").to_string();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = {
            let mut form = intake.write();
            submit_sections(&mut *form, &store, &rules.read())
        };
        match result {
            Ok(submitted) => {
                if confirm {
                    show_confirmation(&sections_confirmation::<PatientDraft>(&submitted));
                }
                on_done.call(());
            }
            Err(err) => tracing::debug!("intake not saved: {err}"),
        }
    };

    let handle_cancel = move |_| {
        intake.write().reset();
        on_cancel.call(());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "add-patient-page",
            div {
                class: "page-header",
                button {
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    Icon { icon: FaArrowLeft, width: 12, height: 12 }
                    " Back to Patients"
                }
                h1 { "Add Patients" }
            }

            form {
                class: "card",
                onsubmit: handle_submit,
                div {
                    class: "section-grid",
                    for section in Section::ALL {
                        PatientSection {
                            key: "{section}",
                            section: section,
                            form: intake.read().section(section).clone(),
                            list_error: intake.read().list_message(section),
                            today: today.clone(),
                            onedit: move |edit: PatientEdit| {
                                intake.write().apply(section, edit, &rules.read());
                            },
                        }
                    }
                }
                div {
                    class: "form-actions",
                    button { class: "primary", r#type: "submit", "Save" }
                    button { class: "text", r#type: "button", onclick: handle_cancel, "Cancel" }
                }
            }
        }
    }
}
