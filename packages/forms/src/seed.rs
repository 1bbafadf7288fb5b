//! Loading seed data through the same checks a submitted form passes.
//!
//! Seed files are edited by hand, so every record is rebuilt into its draft
//! and checked with [`Draft::check`] before it reaches a store. Rejected
//! records are skipped with a warning; the rest are appended in file order.

use store::{Patient, RecordStore, SeedData, Student};

use crate::draft::Draft;
use crate::patient::PatientDraft;
use crate::student::StudentDraft;
use crate::validate::Rules;

/// Counts of seed records appended and skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub patients: usize,
    pub students: usize,
    pub rejected: usize,
}

pub fn load_seed(
    seed: SeedData,
    patients: &impl RecordStore<Patient>,
    students: &impl RecordStore<Student>,
    rules: &Rules,
) -> SeedSummary {
    let mut rejected = 0;
    let valid_patients = checked::<PatientDraft>(seed.patients, rules, &mut rejected);
    let valid_students = checked::<StudentDraft>(seed.students, rules, &mut rejected);

    let summary = SeedSummary {
        patients: patients.append_all(valid_patients).len(),
        students: students.append_all(valid_students).len(),
        rejected,
    };
    tracing::info!(
        patients = summary.patients,
        students = summary.students,
        rejected = summary.rejected,
        "loaded seed data"
    );
    summary
}

fn checked<D>(records: Vec<D::Record>, rules: &Rules, rejected: &mut usize) -> Vec<D::Record>
where
    D: Draft + for<'a> From<&'a D::Record>,
{
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match D::from(&record).check(rules) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(noun = D::NOUN, index, "skipping seed record: {err}");
                *rejected += 1;
                None
            }
        })
        .collect()
}
