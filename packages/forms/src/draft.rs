use std::fmt::Debug;

use crate::error::{FieldError, ListError, RecordError};
use crate::validate::Rules;

/// An entity being edited.
///
/// A draft holds raw field values exactly as the user typed them. Edits are
/// typed messages; each one reports the field path it touched so the form can
/// re-validate just that field. The validator for a path is chosen by
/// [`Draft::validate_field`].
pub trait Draft: Clone + Debug + Default + PartialEq {
    /// Path of a single validated field.
    type Field: Copy + Ord + Debug;
    type Edit;
    /// What a valid draft turns into.
    type Record: Clone + Debug;

    /// Lower-case noun used in section messages ("patient").
    const NOUN: &'static str;

    /// Every field path of the current draft, in display order.
    fn fields(&self) -> Vec<Self::Field>;

    /// Apply an edit. Returns the touched field, or `None` when the edit only
    /// changed the shape of the draft.
    fn apply(&mut self, edit: Self::Edit) -> Option<Self::Field>;

    fn validate_field(&self, field: Self::Field, rules: &Rules) -> Result<(), FieldError>;

    /// Checks over whole repeatable lists; only run on submit.
    fn validate_lists(&self) -> Result<(), ListError> {
        Ok(())
    }

    /// Normalize and convert. Only called after every field validated.
    fn finalize(&self, rules: &Rules) -> Result<Self::Record, FieldError>;

    /// Labelled lines for the confirmation shown after submit.
    fn summary(record: &Self::Record) -> Vec<(&'static str, String)>;

    /// Every check a submit runs, without a form around it. Returns the first
    /// failure, or the finalized record.
    fn check(&self, rules: &Rules) -> Result<Self::Record, RecordError> {
        self.validate_lists()?;
        for field in self.fields() {
            self.validate_field(field, rules)?;
        }
        Ok(self.finalize(rules)?)
    }
}
