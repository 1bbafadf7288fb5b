//! Form state, field validation and the submit pipeline for the intake forms.

pub mod draft;
pub mod error;
pub mod patient;
pub mod seed;
pub mod state;
pub mod student;
pub mod submit;
pub mod validate;

pub use draft::Draft;
pub use error::{FieldError, ListError, RecordError, SubmitError};
pub use patient::{PatientDraft, PatientEdit, PatientField};
pub use seed::{load_seed, SeedSummary};
pub use state::{FormState, Section, SectionedForm};
pub use student::{StudentDraft, StudentEdit, StudentField};
pub use submit::{confirmation, sections_confirmation, submit_form, submit_sections};
pub use validate::Rules;
