//! Handlers for the roster subcommands.
//!
//! Roster conditions are reported through [`output::condition`] and do not
//! fail the command; every other error propagates.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::dataset::{read_students_file, read_tutors_file};
use crate::application::{self, LoadReport, Roster};
use crate::domain::{NewStudent, StudentId};
use crate::error::{Error, Result};
use crate::port::inbound::operator::DatasetSources;
use crate::port::outbound::store::RosterStore;

/// Report a roster condition and swallow it.
///
/// Returns `Ok(None)` when a condition was reported.
pub fn settle<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(Error::Roster(condition)) => {
            output::condition(&condition);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Reset the schema and load both datasets.
pub fn load<S: RosterStore>(roster: &Roster<S>, dataset: &DatasetSources) -> Result<LoadReport> {
    output::section("Loading roster");
    output::field("Tutors", dataset.tutors.display());
    output::field("Students", dataset.students.display());

    let spinner = output::spinner("Reading datasets...");
    let records = read_tutors_file(&dataset.tutors)
        .and_then(|tutors| read_students_file(&dataset.students).map(|s| (tutors, s)));
    let (tutors, students) = match records {
        Ok(records) => records,
        Err(err) => {
            output::spinner_fail(&spinner, "Failed to read datasets");
            return Err(err);
        }
    };
    output::spinner_success(&spinner, "Datasets read");

    roster.reset()?;
    let report = application::load(
        roster,
        tutors.into_iter().map(|record| record.tutor_name),
        students.into_iter().map(NewStudent::from),
    )?;

    for tutor in &report.tutors {
        output::note(&tutor.to_string());
    }
    for student in &report.students {
        output::note(&student.to_string());
    }
    for skipped in &report.skipped {
        output::warning(&format!("{} not enrolled: {}", skipped.name, skipped.reason));
    }

    let summary = report.summary();
    if output::is_json() {
        output::json_output(json!({ "command": "load", "summary": summary }));
    } else {
        output::success(&format!(
            "Loaded {} tutors and {} students ({} skipped)",
            summary.tutors, summary.students, summary.skipped
        ));
    }
    Ok(report)
}

/// List every student.
pub fn students<S: RosterStore>(roster: &Roster<S>) -> Result<()> {
    let students = roster.students()?;
    output::section("Students");
    if students.is_empty() {
        output::note("No students enrolled");
    } else {
        output::students(&students);
    }
    Ok(())
}

/// List every tutor.
pub fn tutors<S: RosterStore>(roster: &Roster<S>) -> Result<()> {
    let tutors = roster.tutors()?;
    output::section("Tutors");
    if tutors.is_empty() {
        output::note("No tutors registered");
    } else {
        output::tutors(&tutors);
    }
    Ok(())
}

/// List students of one tutor.
pub fn search<S: RosterStore>(roster: &Roster<S>, tutor: &str) -> Result<()> {
    output::section(&format!("Students of {tutor}"));
    if let Some(students) = settle(roster.search_by_tutor(tutor))? {
        output::students(&students);
    }
    Ok(())
}

/// Move a student to another tutor.
pub fn reassign<S: RosterStore>(roster: &Roster<S>, id: StudentId, tutor: &str) -> Result<()> {
    output::section("Reassigning tutor");
    if let Some(student) = settle(roster.reassign_tutor(id, tutor))? {
        output::success(&student.to_string());
    }
    Ok(())
}

/// Count the students of one grade.
pub fn count<S: RosterStore>(roster: &Roster<S>, grade: i32) -> Result<()> {
    output::section("Students per grade");
    if let Some(count) = settle(roster.count_grade(grade))? {
        if output::is_json() {
            output::json_output(json!({ "command": "count", "grade": grade, "count": count }));
        } else {
            output::field(&format!("Grade {grade}"), count);
        }
    }
    Ok(())
}
