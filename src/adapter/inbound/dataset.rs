//! CSV dataset readers for the bulk loader.
//!
//! Both files carry a header row. Columns are matched by name, so extra
//! columns are ignored and column order does not matter.

use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::NewStudent;
use crate::error::Result;

/// One row of the tutor dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TutorRecord {
    pub tutor_name: String,
}

/// One row of the student dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub age: i32,
    pub grade: i32,
    pub tutor: String,
}

impl From<StudentRecord> for NewStudent {
    fn from(record: StudentRecord) -> Self {
        NewStudent::new(record.name, record.age, record.grade, record.tutor)
    }
}

fn reader<R: io::Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input)
}

fn read_records<R, T>(input: R) -> Result<Vec<T>>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let records = reader(input)
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()?;
    Ok(records)
}

/// Parse tutor records, in file order.
///
/// # Errors
/// Returns an error if a row is malformed or lacks `tutor_name`.
pub fn read_tutors<R: io::Read>(input: R) -> Result<Vec<TutorRecord>> {
    read_records(input)
}

/// Parse student records, in file order.
///
/// # Errors
/// Returns an error if a row is malformed, lacks a column, or has a
/// non-integer age or grade.
pub fn read_students<R: io::Read>(input: R) -> Result<Vec<StudentRecord>> {
    read_records(input)
}

/// Read the tutor dataset at `path`.
///
/// # Errors
/// Returns an error if the file cannot be opened or parsed.
pub fn read_tutors_file(path: &Path) -> Result<Vec<TutorRecord>> {
    let file = std::fs::File::open(path)?;
    let records = read_tutors(file)?;
    debug!(path = %path.display(), rows = records.len(), "tutor dataset read");
    Ok(records)
}

/// Read the student dataset at `path`.
///
/// # Errors
/// Returns an error if the file cannot be opened or parsed.
pub fn read_students_file(path: &Path) -> Result<Vec<StudentRecord>> {
    let file = std::fs::File::open(path)?;
    let records = read_students(file)?;
    debug!(path = %path.display(), rows = records.len(), "student dataset read");
    Ok(records)
}
