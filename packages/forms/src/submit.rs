//! # Submit pipeline
//!
//! Turns a form into stored records, or leaves it annotated and untouched in
//! the store. For a [`SectionedForm`] the steps are:
//!
//! 1. list-level checks for every section; any failure aborts here
//! 2. full field validation for every section; any failure aborts here
//! 3. normalization ([`Draft::finalize`], e.g. birth date as `YYYY-MM-DD`)
//! 4. one [`RecordStore::append_all`] for all sections
//!
//! Nothing is appended unless every section passed, so a rejected submit
//! never leaves half of a dual form in the store. The caller shows the
//! [`confirmation`] and navigates only after `Ok`.

use store::{RecordStore, Stored};

use crate::draft::Draft;
use crate::error::SubmitError;
use crate::state::{FormState, Section, SectionedForm};
use crate::validate::Rules;

pub fn submit_sections<D, S>(
    form: &mut SectionedForm<D>,
    store: &S,
    rules: &Rules,
) -> Result<Vec<(Section, Stored<D::Record>)>, SubmitError>
where
    D: Draft,
    S: RecordStore<D::Record>,
{
    let mut incomplete = Vec::new();
    for section in Section::ALL {
        if !form.section_mut(section).validate_lists() {
            incomplete.push(section);
        }
    }
    if !incomplete.is_empty() {
        tracing::info!(?incomplete, "submit rejected: incomplete lists");
        return Err(SubmitError::IncompleteLists(incomplete));
    }

    let mut invalid = Vec::new();
    let mut count = 0;
    for section in Section::ALL {
        let state = form.section_mut(section);
        if !state.validate_fields(rules) {
            invalid.push(section);
            count += state.error_count();
        }
    }
    if !invalid.is_empty() {
        tracing::info!(sections = ?invalid, count, "submit rejected: invalid fields");
        return Err(SubmitError::InvalidFields {
            sections: invalid,
            count,
        });
    }

    let records = Section::ALL
        .iter()
        .map(|section| form.section(*section).draft().finalize(rules))
        .collect::<Result<Vec<_>, _>>()
        .map_err(SubmitError::Finalize)?;

    let stored = store.append_all(records);
    tracing::info!(count = stored.len(), noun = D::NOUN, "submitted sections");
    Ok(Section::ALL.into_iter().zip(stored).collect())
}

pub fn submit_form<D, S>(
    form: &mut FormState<D>,
    store: &S,
    rules: &Rules,
) -> Result<Stored<D::Record>, SubmitError>
where
    D: Draft,
    S: RecordStore<D::Record>,
{
    if !form.validate_lists() {
        return Err(SubmitError::IncompleteLists(Vec::new()));
    }
    if !form.validate_fields(rules) {
        let count = form.error_count();
        tracing::info!(count, "submit rejected: invalid fields");
        return Err(SubmitError::InvalidFields {
            sections: Vec::new(),
            count,
        });
    }
    let record = form.draft().finalize(rules).map_err(SubmitError::Finalize)?;
    let stored = store.append(record);
    tracing::info!(id = %stored.id, noun = D::NOUN, "submitted form");
    Ok(stored)
}

/// Text listing every submitted field, one block per record.
pub fn confirmation<D: Draft>(heading: &str, record: &D::Record) -> String {
    let mut text = format!("{heading}\n");
    for (label, value) in D::summary(record) {
        text.push_str(&format!("{label}: {value}\n"));
    }
    text
}

pub fn sections_confirmation<D: Draft>(submitted: &[(Section, Stored<D::Record>)]) -> String {
    submitted
        .iter()
        .map(|(section, stored)| {
            let heading = format!("{} {} added", section.title(), D::NOUN);
            confirmation::<D>(&heading, &stored.record)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use store::config::ValidationConfig;
    use store::{Disorder, Gender, MemoryStore, Patient, RecordId, Student};

    use super::*;
    use crate::patient::{PatientDraft, PatientEdit, PatientField};
    use crate::student::{StudentDraft, StudentEdit};

    fn rules() -> Rules {
        Rules::new(
            &ValidationConfig::default(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        )
    }

    fn fill(form: &mut SectionedForm<PatientDraft>, section: Section, workspace: &str) {
        let rules = rules();
        let edits = [
            PatientEdit::FirstName("Noam".to_string()),
            PatientEdit::LastName("Bar".to_string()),
            PatientEdit::Gender(Gender::Male),
            PatientEdit::BirthDate("2023-07-04".to_string()),
            PatientEdit::ToggleDisorder(Disorder::Pd),
            PatientEdit::Workspace {
                index: 0,
                value: workspace.to_string(),
            },
        ];
        for edit in edits {
            form.apply(section, edit, &rules);
        }
    }

    #[test]
    fn test_dual_submit_commits_both() {
        let store = MemoryStore::<Patient>::new();
        let mut form = SectionedForm::new();
        fill(&mut form, Section::Left, "Left");
        fill(&mut form, Section::Right, "Both");

        let submitted = submit_sections(&mut form, &store, &rules()).unwrap();
        assert_eq!(submitted.len(), 2);
        assert_eq!(submitted[0].0, Section::Left);
        assert_eq!(submitted[1].1.id, RecordId(2));
        assert_eq!(submitted[0].1.record.birth_date_iso(), "2023-07-04");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_empty_left_workspaces_reject_left_only() {
        let store = MemoryStore::<Patient>::new();
        let mut form = SectionedForm::new();
        fill(&mut form, Section::Left, "");
        form.apply(Section::Left, PatientEdit::AppendWorkspace, &rules());
        fill(&mut form, Section::Right, "Right");

        let err = submit_sections(&mut form, &store, &rules()).unwrap_err();
        assert_eq!(err, SubmitError::IncompleteLists(vec![Section::Left]));
        assert_eq!(
            form.list_message(Section::Left).as_deref(),
            Some("At least one workspace is required for left patient")
        );
        assert_eq!(form.list_message(Section::Right), None);
        assert_eq!(form.section(Section::Right).error_count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_field_in_one_section_commits_nothing() {
        let store = MemoryStore::<Patient>::new();
        let mut form = SectionedForm::new();
        fill(&mut form, Section::Left, "Left");
        fill(&mut form, Section::Right, "Right");
        form.apply(Section::Right, PatientEdit::ToggleDisorder(Disorder::Pd), &rules());

        let err = submit_sections(&mut form, &store, &rules()).unwrap_err();
        assert_eq!(
            err,
            SubmitError::InvalidFields {
                sections: vec![Section::Right],
                count: 1
            }
        );
        assert_eq!(
            form.section(Section::Right)
                .message(PatientField::Disorders)
                .as_deref(),
            Some("At least one disorder must be selected")
        );
        assert!(store.is_empty());

        // fixing the field lets the same form through
        form.apply(Section::Right, PatientEdit::ToggleDisorder(Disorder::Other), &rules());
        assert!(form.section(Section::Right).error(PatientField::Disorders).is_none());
        assert!(submit_sections(&mut form, &store, &rules()).is_ok());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_single_form_submit() {
        let store = MemoryStore::<Student>::new();
        let mut form = FormState::<StudentDraft>::new();
        let rules = rules();

        assert!(submit_form(&mut form, &store, &rules).is_err());
        assert_eq!(form.error_count(), 3);

        form.apply(StudentEdit::Name("Tal".to_string()), &rules);
        form.apply(StudentEdit::Age("19".to_string()), &rules);
        form.apply(StudentEdit::Major("History".to_string()), &rules);
        let stored = submit_form(&mut form, &store, &rules).unwrap();
        assert_eq!(stored.record.age, 19);
        assert_eq!(store.list(), vec![stored]);
    }

    #[test]
    fn test_confirmation_lists_fields() {
        let store = MemoryStore::<Patient>::new();
        let mut form = SectionedForm::new();
        fill(&mut form, Section::Left, "Left");
        fill(&mut form, Section::Right, "Right");
        let submitted = submit_sections(&mut form, &store, &rules()).unwrap();

        let text = sections_confirmation::<PatientDraft>(&submitted);
        assert!(text.starts_with("Left patient added\nName: Noam Bar\n"));
        assert!(text.contains("Right patient added\n"));
        assert!(text.contains("Birth Date: 2023-07-04\n"));
        assert!(text.contains("Workspaces: Right\n"));
    }
}
