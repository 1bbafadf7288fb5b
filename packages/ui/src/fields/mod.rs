//! Form widgets. Each one is controlled: it renders the value it is given,
//! reports changes through an event handler and shows an optional error
//! message under itself.

mod text_input;
pub use text_input::TextInput;

mod gender_radio_group;
pub use gender_radio_group::GenderRadioGroup;

mod birth_date_input;
pub use birth_date_input::BirthDateInput;

mod disorders_checkbox_group;
pub use disorders_checkbox_group::DisordersCheckboxGroup;

mod workspace_template_fields;
pub use workspace_template_fields::WorkspaceTemplateFields;

mod patient_section;
pub use patient_section::PatientSection;
