use store::{Disorder, ParseOptionError};

use crate::state::Section;

/// A per-field validation failure. `Display` is the message shown under the field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} cannot contain numbers")]
    ContainsDigits(&'static str),
    #[error("{label} must be at least {min} characters")]
    TooShort { label: &'static str, min: usize },
    #[error("{label} cannot exceed {max} characters")]
    TooLong { label: &'static str, max: usize },
    #[error("Please enter a valid date")]
    InvalidDate,
    #[error("Birth date cannot be in the future")]
    FutureDate,
    #[error("At least one disorder must be selected")]
    NoDisorder,
    #[error("{0} is selected more than once")]
    DuplicateDisorder(Disorder),
    #[error("{0} must be a whole number")]
    NotANumber(&'static str),
    #[error(transparent)]
    UnknownOption(#[from] ParseOptionError),
}

/// A failure of a whole repeatable list, checked only on submit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("At least one workspace is required")]
    NoWorkspace,
}

/// Why a submit was rejected. The form keeps the detailed annotations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("incomplete lists in {0:?}")]
    IncompleteLists(Vec<Section>),
    #[error("{count} invalid field(s) in {sections:?}")]
    InvalidFields { sections: Vec<Section>, count: usize },
    #[error("could not finalize record: {0}")]
    Finalize(FieldError),
}

/// Why a finished record could not be rebuilt into a valid one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    List(#[from] ListError),
    #[error(transparent)]
    Field(#[from] FieldError),
}
