//! Persistence port for the roster.

use crate::domain::{NewStudent, Student, StudentId, Tutor};
use crate::error::Result;

/// Storage operations for tutors and students.
///
/// Every method is a self-contained request: implementations acquire their
/// connection on entry and release it before returning.
pub trait RosterStore {
    /// Drop and recreate both tables. Destroys all rows.
    fn reset_schema(&self) -> Result<()>;

    /// Persist a new tutor. Duplicate names are accepted.
    fn insert_tutor(&self, name: &str) -> Result<Tutor>;

    /// Persist a new student under the first tutor named `student.tutor`.
    ///
    /// Fails with `RosterError::TutorNotFound` without writing anything if
    /// no such tutor exists.
    fn insert_student(&self, student: &NewStudent) -> Result<Student>;

    /// All tutors in storage order.
    fn tutors(&self) -> Result<Vec<Tutor>>;

    /// All students in storage order, tutor names resolved.
    fn students(&self) -> Result<Vec<Student>>;

    /// Students whose tutor name equals `tutor` exactly.
    fn students_by_tutor(&self, tutor: &str) -> Result<Vec<Student>>;

    /// Point student `id` at the first tutor named `tutor`.
    ///
    /// The tutor is resolved before the student; either lookup failing
    /// leaves the store untouched.
    fn reassign_tutor(&self, id: StudentId, tutor: &str) -> Result<Student>;

    /// Number of students enrolled in `grade`.
    fn count_by_grade(&self, grade: i32) -> Result<i64>;
}
