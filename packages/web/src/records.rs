//! Store handles and configuration shared by the route components.
//!
//! Only the route components read this from context; the shared views in
//! `ui` receive the handles they need as props.

use dioxus::prelude::*;
use forms::Rules;
use store::{FormsConfig, MemoryStore, Patient, SeedData, Student};

const SEED_TOML: &str = include_str!("../seed.toml");
const FORMS_TOML: &str = include_str!("../forms.toml");

#[derive(Clone)]
pub(crate) struct Records {
    pub patients: MemoryStore<Patient>,
    pub students: MemoryStore<Student>,
    pub config: FormsConfig,
}

impl Records {
    /// Fresh stores filled with the valid records of the embedded seed data.
    pub fn load() -> Self {
        let config = FormsConfig::from_toml(FORMS_TOML).unwrap_or_else(|e| {
            tracing::warn!("invalid {}, using defaults: {e}", FormsConfig::filename());
            FormsConfig::default()
        });
        let seed = SeedData::from_toml(SEED_TOML).unwrap_or_else(|e| {
            tracing::warn!("{e}; starting with empty stores");
            SeedData::default()
        });

        let rules = Rules::local(&config.validation);
        let records = Self {
            patients: MemoryStore::new(),
            students: MemoryStore::new(),
            config,
        };
        forms::load_seed(seed, &records.patients, &records.students, &rules);
        records
    }
}

pub(crate) fn use_records() -> Records {
    use_context::<Records>()
}
