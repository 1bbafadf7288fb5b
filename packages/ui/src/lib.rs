//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod fields;
pub mod views;

pub const FORMS_CSS: Asset = asset!("/assets/forms.css");

mod navbar;
pub use navbar::Navbar;

mod confirm;
pub use confirm::show_confirmation;

mod student_form;
pub use student_form::StudentForm;
