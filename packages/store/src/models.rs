//! # Domain models for patients and students
//!
//! Defines the records held by a [`crate::RecordStore`] and the fixed option
//! enumerations the intake forms choose from. Every type is
//! `Serialize + Deserialize` so seed data can be read from TOML.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Patient`] | A finalized patient: names, [`Gender`], birth date, a non-empty set of [`Disorder`]s and an ordered list of [`Workspace`]s. |
//! | [`Student`] | A student row shown on the students page: name, age and major. |
//! | [`Stored`] | A record paired with the [`RecordId`] the store assigned on append. |
//!
//! ## Option enumerations
//!
//! [`Gender`], [`Disorder`] and [`WorkspaceTemplate`] each expose `ALL` (display
//! order), `as_str` (the label shown in the UI and written to TOML) and a
//! [`FromStr`] impl that accepts exactly those labels.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raised when a label does not name any option of an enumeration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{value} is not a valid {kind}")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
}

/// Identifier assigned by the store on append. Never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(RecordId)
    }
}

/// A record owned by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    pub id: RecordId,
    pub record: T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Disorder {
    #[serde(rename = "PD")]
    Pd,
    #[serde(rename = "ET")]
    Et,
    #[serde(rename = "Dyst_G")]
    DystG,
    #[serde(rename = "Dyst_NG")]
    DystNg,
    #[serde(rename = "OCD")]
    Ocd,
    Tourette,
    Epilepsy,
    Other,
}

impl Disorder {
    pub const ALL: [Disorder; 8] = [
        Disorder::Pd,
        Disorder::Et,
        Disorder::DystG,
        Disorder::DystNg,
        Disorder::Ocd,
        Disorder::Tourette,
        Disorder::Epilepsy,
        Disorder::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Disorder::Pd => "PD",
            Disorder::Et => "ET",
            Disorder::DystG => "Dyst_G",
            Disorder::DystNg => "Dyst_NG",
            Disorder::Ocd => "OCD",
            Disorder::Tourette => "Tourette",
            Disorder::Epilepsy => "Epilepsy",
            Disorder::Other => "Other",
        }
    }
}

/// Which side(s) of the rig a workspace is set up for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkspaceTemplate {
    Left,
    Right,
    Both,
}

impl WorkspaceTemplate {
    pub const ALL: [WorkspaceTemplate; 3] = [
        WorkspaceTemplate::Left,
        WorkspaceTemplate::Right,
        WorkspaceTemplate::Both,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkspaceTemplate::Left => "Left",
            WorkspaceTemplate::Right => "Right",
            WorkspaceTemplate::Both => "Both",
        }
    }
}

fn parse_option<T: Copy>(
    all: &[T],
    label: impl Fn(&T) -> &'static str,
    kind: &'static str,
    value: &str,
) -> Result<T, ParseOptionError> {
    let value = value.trim();
    all.iter()
        .copied()
        .find(|option| label(option) == value)
        .ok_or_else(|| ParseOptionError {
            kind,
            value: value.to_string(),
        })
}

impl FromStr for Gender {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option(&Gender::ALL, Gender::as_str, "gender", s)
    }
}

impl FromStr for Disorder {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option(&Disorder::ALL, Disorder::as_str, "disorder", s)
    }
}

impl FromStr for WorkspaceTemplate {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option(&WorkspaceTemplate::ALL, WorkspaceTemplate::as_str, "workspace template", s)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Disorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WorkspaceTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a patient's workspace list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub name: WorkspaceTemplate,
}

/// A finalized patient record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub disorders: Vec<Disorder>,
    pub workspaces: Vec<Workspace>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Birth date as `YYYY-MM-DD`.
    pub fn birth_date_iso(&self) -> String {
        self.birth_date.format("%Y-%m-%d").to_string()
    }

    pub fn disorder_labels(&self) -> String {
        join_labels(self.disorders.iter().map(Disorder::as_str))
    }

    pub fn workspace_labels(&self) -> String {
        join_labels(self.workspaces.iter().map(|w| w.name.as_str()))
    }
}

/// A student row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub age: u32,
    pub major: String,
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(", ")
}
