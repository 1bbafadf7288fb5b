use dioxus::prelude::*;
use forms::{submit_form, FormState, Rules, StudentDraft, StudentEdit, StudentField};
use store::{MemoryStore, RecordId, Student};

use crate::fields::TextInput;

/// Inline form for adding a student. Clears itself after a successful save.
#[component]
pub fn StudentForm(store: MemoryStore<Student>, on_added: EventHandler<RecordId>) -> Element {
    let rules = use_signal(Rules::default);
    let mut student = use_signal(FormState::<StudentDraft>::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = {
            let mut state = student.write();
            submit_form(&mut *state, &store, &rules.read())
        };
        if let Ok(stored) = result {
            tracing::info!(id = %stored.id, name = %stored.record.name, "student added");
            student.write().reset();
            on_added.call(stored.id);
        }
    };

    let state = student.read().clone();

    rsx! {
        div {
            class: "student-form card",
            h2 { "Student Form" }
            form {
                onsubmit: handle_submit,
                TextInput {
                    id: "student-name".to_string(),
                    label: "Name:".to_string(),
                    value: state.draft().name.clone(),
                    error: state.message(StudentField::Name),
                    oninput: move |value: String| student.write().apply(StudentEdit::Name(value), &rules.read()),
                }
                TextInput {
                    id: "student-age".to_string(),
                    label: "Age:".to_string(),
                    input_type: "number".to_string(),
                    value: state.draft().age.clone(),
                    error: state.message(StudentField::Age),
                    oninput: move |value: String| student.write().apply(StudentEdit::Age(value), &rules.read()),
                }
                TextInput {
                    id: "student-major".to_string(),
                    label: "Major:".to_string(),
                    value: state.draft().major.clone(),
                    error: state.message(StudentField::Major),
                    oninput: move |value: String| student.write().apply(StudentEdit::Major(value), &rules.read()),
                }
                button { class: "primary", r#type: "submit", "Submit" }
            }
        }
    }
}
