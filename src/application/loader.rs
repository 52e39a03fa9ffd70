//! Bulk population of the roster from tutor names and student rows.
//!
//! All tutors are inserted before any student so that every student's
//! tutor reference can be resolved.

use serde::Serialize;
use tracing::{info, warn};

use super::roster::Roster;
use crate::domain::{NewStudent, Student, Tutor};
use crate::error::{Error, Result, RosterError};
use crate::port::outbound::store::RosterStore;

/// A student record that could not be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedStudent {
    pub name: String,
    pub reason: RosterError,
}

/// Outcome of a bulk load.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub tutors: Vec<Tutor>,
    pub students: Vec<Student>,
    pub skipped: Vec<SkippedStudent>,
}

/// Counts from a [`LoadReport`], for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub tutors: usize,
    pub students: usize,
    pub skipped: usize,
}

impl LoadReport {
    #[must_use]
    pub fn summary(&self) -> LoadSummary {
        LoadSummary {
            tutors: self.tutors.len(),
            students: self.students.len(),
            skipped: self.skipped.len(),
        }
    }
}

/// Insert every tutor, then every student, each in input order.
///
/// A student whose tutor does not exist is recorded in
/// [`LoadReport::skipped`] and the load continues.
///
/// # Errors
/// Returns the first storage error; rows inserted before it stay.
pub fn load<S, T, U>(roster: &Roster<S>, tutors: T, students: U) -> Result<LoadReport>
where
    S: RosterStore,
    T: IntoIterator,
    T::Item: AsRef<str>,
    U: IntoIterator<Item = NewStudent>,
{
    let mut report = LoadReport::default();

    for name in tutors {
        report.tutors.push(roster.add_tutor(name.as_ref())?);
    }

    for student in students {
        match roster.enroll(&student) {
            Ok(inserted) => report.students.push(inserted),
            Err(Error::Roster(reason)) => {
                warn!(name = %student.name, %reason, "student skipped");
                report.skipped.push(SkippedStudent {
                    name: student.name,
                    reason,
                });
            }
            Err(err) => return Err(err),
        }
    }

    let summary = report.summary();
    info!(
        tutors = summary.tutors,
        students = summary.students,
        skipped = summary.skipped,
        "bulk load complete"
    );
    Ok(report)
}
