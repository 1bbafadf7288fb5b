//! Static mock data loaded into the stores at startup.
//!
//! This module only parses the file; records are checked before they are
//! appended (see `forms::seed`).

use serde::{Deserialize, Serialize};

use crate::models::{Patient, Student};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to parse seed data: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Initial contents of the patient and student stores.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub students: Vec<Student>,
}

impl SeedData {
    pub fn from_toml(s: &str) -> Result<Self, SeedError> {
        Ok(toml::from_str(s)?)
    }
}
