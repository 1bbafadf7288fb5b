//! # Patient intake draft
//!
//! [`PatientDraft`] is the in-progress form of a [`Patient`]: two name fields,
//! a gender choice, the raw birth date input, a multi-select set of disorders
//! and a repeatable list of workspace entries.
//!
//! * Disorders toggle: selecting an option appends it, selecting it again
//!   removes it. Order is selection order.
//! * Workspaces are append-only. A new draft starts with one empty entry; each
//!   entry is edited independently and stored trimmed. Entries are never
//!   removed.

use store::{Disorder, Gender, Patient, Workspace};

use crate::draft::Draft;
use crate::error::{FieldError, ListError};
use crate::validate::{self, Rules};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatientField {
    FirstName,
    LastName,
    Gender,
    BirthDate,
    Disorders,
    /// Entry at this index of the workspace list.
    Workspace(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PatientEdit {
    FirstName(String),
    LastName(String),
    Gender(Gender),
    BirthDate(String),
    ToggleDisorder(Disorder),
    Workspace { index: usize, value: String },
    AppendWorkspace,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub birth_date: String,
    pub disorders: Vec<Disorder>,
    pub workspaces: Vec<String>,
}

impl Default for PatientDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            gender: None,
            birth_date: String::new(),
            disorders: Vec::new(),
            workspaces: vec![String::new()],
        }
    }
}

/// A draft holding the values of an existing record, as the form would.
impl From<&Patient> for PatientDraft {
    fn from(patient: &Patient) -> Self {
        Self {
            first_name: patient.first_name.clone(),
            last_name: patient.last_name.clone(),
            gender: Some(patient.gender),
            birth_date: patient.birth_date_iso(),
            disorders: patient.disorders.clone(),
            workspaces: patient
                .workspaces
                .iter()
                .map(|workspace| workspace.name.as_str().to_string())
                .collect(),
        }
    }
}

impl Draft for PatientDraft {
    type Field = PatientField;
    type Edit = PatientEdit;
    type Record = Patient;

    const NOUN: &'static str = "patient";

    fn fields(&self) -> Vec<PatientField> {
        let mut fields = vec![
            PatientField::FirstName,
            PatientField::LastName,
            PatientField::Gender,
            PatientField::BirthDate,
            PatientField::Disorders,
        ];
        fields.extend((0..self.workspaces.len()).map(PatientField::Workspace));
        fields
    }

    fn apply(&mut self, edit: PatientEdit) -> Option<PatientField> {
        match edit {
            PatientEdit::FirstName(value) => {
                self.first_name = value;
                Some(PatientField::FirstName)
            }
            PatientEdit::LastName(value) => {
                self.last_name = value;
                Some(PatientField::LastName)
            }
            PatientEdit::Gender(gender) => {
                self.gender = Some(gender);
                Some(PatientField::Gender)
            }
            PatientEdit::BirthDate(value) => {
                self.birth_date = value;
                Some(PatientField::BirthDate)
            }
            PatientEdit::ToggleDisorder(disorder) => {
                if let Some(pos) = self.disorders.iter().position(|d| *d == disorder) {
                    self.disorders.remove(pos);
                } else {
                    self.disorders.push(disorder);
                }
                Some(PatientField::Disorders)
            }
            PatientEdit::Workspace { index, value } => {
                let entry = self.workspaces.get_mut(index)?;
                *entry = value.trim().to_string();
                Some(PatientField::Workspace(index))
            }
            PatientEdit::AppendWorkspace => {
                self.workspaces.push(String::new());
                None
            }
        }
    }

    fn validate_field(&self, field: PatientField, rules: &Rules) -> Result<(), FieldError> {
        match field {
            PatientField::FirstName => validate::person_name("First name", &self.first_name, rules),
            PatientField::LastName => validate::person_name("Last name", &self.last_name, rules),
            PatientField::Gender => validate::gender(self.gender).map(drop),
            PatientField::BirthDate => validate::birth_date(&self.birth_date, rules).map(drop),
            PatientField::Disorders => validate::disorders(&self.disorders),
            PatientField::Workspace(index) => match self.workspaces.get(index) {
                Some(raw) => validate::workspace(raw).map(drop),
                None => Ok(()),
            },
        }
    }

    fn validate_lists(&self) -> Result<(), ListError> {
        validate::workspace_list(&self.workspaces)
    }

    fn finalize(&self, rules: &Rules) -> Result<Patient, FieldError> {
        let birth_date = validate::birth_date(&self.birth_date, rules)?;
        let workspaces = self
            .workspaces
            .iter()
            .map(|raw| validate::workspace(raw).map(|name| Workspace { name }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Patient {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            gender: validate::gender(self.gender)?,
            birth_date,
            disorders: self.disorders.clone(),
            workspaces,
        })
    }

    fn summary(record: &Patient) -> Vec<(&'static str, String)> {
        vec![
            ("Name", record.full_name()),
            ("Gender", record.gender.to_string()),
            ("Birth Date", record.birth_date_iso()),
            ("Disorders", record.disorder_labels()),
            ("Workspaces", record.workspace_labels()),
        ]
    }
}
