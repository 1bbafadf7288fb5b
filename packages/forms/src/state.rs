//! # Form state
//!
//! [`FormState`] wraps a [`Draft`] with its validation annotations: per-field
//! errors keyed by field path, and one list-level error. Errors stay hidden
//! until the first submit attempt; after that, every edit re-validates the
//! field it touched.
//!
//! [`SectionedForm`] holds two independent form states side by side under
//! [`Section::Left`] and [`Section::Right`]. Each section validates on its own;
//! [`crate::submit::submit_sections`] commits them together or not at all.

use std::collections::BTreeMap;
use std::fmt;

use crate::draft::Draft;
use crate::error::{FieldError, ListError};
use crate::validate::Rules;

#[derive(Clone, Debug, PartialEq)]
pub struct FormState<D: Draft> {
    draft: D,
    errors: BTreeMap<D::Field, FieldError>,
    list_error: Option<ListError>,
    submitted: bool,
}

impl<D: Draft> Default for FormState<D> {
    fn default() -> Self {
        Self {
            draft: D::default(),
            errors: BTreeMap::new(),
            list_error: None,
            submitted: false,
        }
    }
}

impl<D: Draft> FormState<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn error(&self, field: D::Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// The error for `field` as display text.
    pub fn message(&self, field: D::Field) -> Option<String> {
        self.error(field).map(ToString::to_string)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn list_error(&self) -> Option<&ListError> {
        self.list_error.as_ref()
    }

    pub fn apply(&mut self, edit: D::Edit, rules: &Rules) {
        let Some(field) = self.draft.apply(edit) else {
            return;
        };
        if self.submitted {
            self.revalidate(field, rules);
        }
    }

    fn revalidate(&mut self, field: D::Field, rules: &Rules) {
        match self.draft.validate_field(field, rules) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(err) => {
                self.errors.insert(field, err);
            }
        }
    }

    /// Run the list-level checks. Sets or clears the list error.
    pub fn validate_lists(&mut self) -> bool {
        self.submitted = true;
        self.list_error = self.draft.validate_lists().err();
        self.list_error.is_none()
    }

    /// Validate every field, replacing all field errors.
    pub fn validate_fields(&mut self, rules: &Rules) -> bool {
        self.submitted = true;
        self.errors.clear();
        for field in self.draft.fields() {
            if let Err(err) = self.draft.validate_field(field, rules) {
                self.errors.insert(field, err);
            }
        }
        self.errors.is_empty()
    }

    /// Discard the draft and every annotation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Named key of one half of a dual-section form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Left,
    Right,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Left, Section::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Left => "left",
            Section::Right => "right",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Left => "Left",
            Section::Right => "Right",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionedForm<D: Draft> {
    left: FormState<D>,
    right: FormState<D>,
}

impl<D: Draft> SectionedForm<D> {
    pub fn new() -> Self {
        Self {
            left: FormState::new(),
            right: FormState::new(),
        }
    }

    pub fn section(&self, section: Section) -> &FormState<D> {
        match section {
            Section::Left => &self.left,
            Section::Right => &self.right,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut FormState<D> {
        match section {
            Section::Left => &mut self.left,
            Section::Right => &mut self.right,
        }
    }

    pub fn apply(&mut self, section: Section, edit: D::Edit, rules: &Rules) {
        self.section_mut(section).apply(edit, rules);
    }

    /// Section-scoped list error, e.g. "At least one workspace is required for left patient".
    pub fn list_message(&self, section: Section) -> Option<String> {
        self.section(section)
            .list_error()
            .map(|err| format!("{err} for {section} {}", D::NOUN))
    }

    pub fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use store::config::ValidationConfig;
    use store::Disorder;

    use super::*;
    use crate::patient::{PatientDraft, PatientEdit, PatientField};

    fn rules() -> Rules {
        Rules::new(
            &ValidationConfig::default(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        )
    }

    #[test]
    fn test_errors_hidden_until_submit() {
        let rules = rules();
        let mut form = FormState::<PatientDraft>::new();
        form.apply(PatientEdit::FirstName("R2".to_string()), &rules);
        assert!(form.error(PatientField::FirstName).is_none());

        assert!(!form.validate_fields(&rules));
        assert_eq!(
            form.message(PatientField::FirstName).as_deref(),
            Some("First name cannot contain numbers")
        );
    }

    #[test]
    fn test_edit_after_submit_revalidates_touched_field() {
        let rules = rules();
        let mut form = FormState::<PatientDraft>::new();
        form.validate_fields(&rules);
        assert_eq!(
            form.message(PatientField::Disorders).as_deref(),
            Some("At least one disorder must be selected")
        );
        let before = form.error_count();

        form.apply(PatientEdit::ToggleDisorder(Disorder::Other), &rules);
        assert!(form.error(PatientField::Disorders).is_none());
        assert_eq!(form.error_count(), before - 1);

        form.apply(PatientEdit::ToggleDisorder(Disorder::Other), &rules);
        assert!(form.error(PatientField::Disorders).is_some());
    }

    #[test]
    fn test_future_date_flagged_after_submit() {
        let rules = rules();
        let mut form = FormState::<PatientDraft>::new();
        form.validate_fields(&rules);
        form.apply(PatientEdit::BirthDate("2024-06-16".to_string()), &rules);
        assert_eq!(
            form.message(PatientField::BirthDate).as_deref(),
            Some("Birth date cannot be in the future")
        );
        form.apply(PatientEdit::BirthDate("2024-06-14".to_string()), &rules);
        assert!(form.error(PatientField::BirthDate).is_none());
    }

    #[test]
    fn test_list_error_is_separate_from_entry_errors() {
        let rules = rules();
        let mut form = FormState::<PatientDraft>::new();
        assert!(!form.validate_lists());
        assert_eq!(form.list_error(), Some(&ListError::NoWorkspace));
        assert!(form.error(PatientField::Workspace(0)).is_none());

        form.apply(
            PatientEdit::Workspace {
                index: 0,
                value: "Left".to_string(),
            },
            &rules,
        );
        // list checks only change on submit
        assert!(form.list_error().is_some());
        assert!(form.validate_lists());
        assert!(form.list_error().is_none());
    }

    #[test]
    fn test_sections_are_independent() {
        let rules = rules();
        let mut form = SectionedForm::<PatientDraft>::new();
        form.apply(Section::Left, PatientEdit::LastName("Katz".to_string()), &rules);
        form.apply(Section::Right, PatientEdit::AppendWorkspace, &rules);

        assert_eq!(form.section(Section::Left).draft().last_name, "Katz");
        assert!(form.section(Section::Right).draft().last_name.is_empty());
        assert_eq!(form.section(Section::Left).draft().workspaces.len(), 1);
        assert_eq!(form.section(Section::Right).draft().workspaces.len(), 2);

        form.section_mut(Section::Right).validate_lists();
        assert_eq!(form.list_message(Section::Left), None);
        assert_eq!(
            form.list_message(Section::Right).as_deref(),
            Some("At least one workspace is required for right patient")
        );

        form.reset();
        assert_eq!(form, SectionedForm::new());
    }
}
