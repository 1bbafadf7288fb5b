use dioxus::prelude::*;
use forms::{FormState, PatientDraft, PatientEdit, PatientField, Section};

use super::{BirthDateInput, DisordersCheckboxGroup, GenderRadioGroup, TextInput, WorkspaceTemplateFields};

/// All fields of one patient in the dual intake form.
///
/// Every change is reported as a [`PatientEdit`]; the owning view applies it
/// to the section's form state.
#[component]
pub fn PatientSection(
    section: Section,
    form: FormState<PatientDraft>,
    /// Section-scoped list error, already formatted.
    list_error: Option<String>,
    /// Latest selectable birth date, `YYYY-MM-DD`.
    today: String,
    onedit: EventHandler<PatientEdit>,
) -> Element {
    let draft = form.draft().clone();
    let prefix = section.as_str();
    let title = section.title();
    let workspace_errors: Vec<Option<String>> = (0..draft.workspaces.len())
        .map(|index| form.message(PatientField::Workspace(index)))
        .collect();

    rsx! {
        section {
            class: "patient-section",
            h2 { "Add {title} Patient" }

            div {
                class: "field-row",
                TextInput {
                    id: format!("{prefix}-first-name"),
                    label: "First name *".to_string(),
                    value: draft.first_name.clone(),
                    error: form.message(PatientField::FirstName),
                    oninput: move |value: String| onedit.call(PatientEdit::FirstName(value)),
                }
                TextInput {
                    id: format!("{prefix}-last-name"),
                    label: "Last name *".to_string(),
                    value: draft.last_name.clone(),
                    error: form.message(PatientField::LastName),
                    oninput: move |value: String| onedit.call(PatientEdit::LastName(value)),
                }
            }

            GenderRadioGroup {
                name: format!("{prefix}-gender"),
                selected: draft.gender,
                error: form.message(PatientField::Gender),
                onchange: move |gender| onedit.call(PatientEdit::Gender(gender)),
            }

            BirthDateInput {
                id: format!("{prefix}-birth-date"),
                value: draft.birth_date.clone(),
                max: today,
                error: form.message(PatientField::BirthDate),
                onchange: move |value: String| onedit.call(PatientEdit::BirthDate(value)),
            }

            DisordersCheckboxGroup {
                name: format!("{prefix}-disorders"),
                selected: draft.disorders.clone(),
                error: form.message(PatientField::Disorders),
                ontoggle: move |disorder| onedit.call(PatientEdit::ToggleDisorder(disorder)),
            }

            WorkspaceTemplateFields {
                id_prefix: prefix.to_string(),
                entries: draft.workspaces.clone(),
                errors: workspace_errors,
                list_error: list_error,
                onchange: move |(index, value): (usize, String)| {
                    onedit.call(PatientEdit::Workspace { index, value })
                },
                onappend: move |_| onedit.call(PatientEdit::AppendWorkspace),
            }
        }
    }
}
