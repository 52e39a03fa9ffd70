//! Roster use cases layered over a [`RosterStore`].
//!
//! The store reports raw results; this layer turns empty searches and
//! zero counts into the informational [`RosterError`] conditions the
//! operator sees.

use tracing::{info, warn};

use crate::domain::{is_known_grade, NewStudent, Student, StudentId, Tutor};
use crate::error::{Result, RosterError};
use crate::port::outbound::store::RosterStore;

/// Roster operations over an owned store.
pub struct Roster<S> {
    store: S,
}

impl<S: RosterStore> Roster<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Drop and recreate the schema. Destroys all rows.
    pub fn reset(&self) -> Result<()> {
        self.store.reset_schema()?;
        info!("roster schema recreated");
        Ok(())
    }

    pub fn add_tutor(&self, name: &str) -> Result<Tutor> {
        self.store.insert_tutor(name)
    }

    /// Enroll a student under an existing tutor.
    ///
    /// Grades outside 1-6 are accepted with a warning.
    pub fn enroll(&self, student: &NewStudent) -> Result<Student> {
        if !is_known_grade(student.grade) {
            warn!(name = %student.name, grade = student.grade, "grade outside the usual range");
        }
        self.store.insert_student(student)
    }

    pub fn tutors(&self) -> Result<Vec<Tutor>> {
        self.store.tutors()
    }

    pub fn students(&self) -> Result<Vec<Student>> {
        self.store.students()
    }

    /// Students assigned to the tutor named `tutor`.
    ///
    /// # Errors
    /// `RosterError::TutorNotInList` when nobody matches.
    pub fn search_by_tutor(&self, tutor: &str) -> Result<Vec<Student>> {
        let students = self.store.students_by_tutor(tutor)?;
        if students.is_empty() {
            return Err(RosterError::TutorNotInList {
                name: tutor.to_string(),
            }
            .into());
        }
        Ok(students)
    }

    /// Move a student to another tutor.
    ///
    /// # Errors
    /// `RosterError::TutorNotFound` or `RosterError::StudentNotFound`, in
    /// that order of precedence. Nothing is written on error.
    pub fn reassign_tutor(&self, id: StudentId, tutor: &str) -> Result<Student> {
        let student = self.store.reassign_tutor(id, tutor)?;
        info!(student = %id, tutor, "student reassigned");
        Ok(student)
    }

    /// Number of students in `grade`.
    ///
    /// # Errors
    /// `RosterError::GradeNotInList` when the count is zero.
    pub fn count_grade(&self, grade: i32) -> Result<i64> {
        match self.store.count_by_grade(grade)? {
            0 => Err(RosterError::GradeNotInList { grade }.into()),
            count => Ok(count),
        }
    }
}
