//! In-memory [`RosterStore`] for application tests.

use std::cell::RefCell;

use crate::domain::{NewStudent, Student, StudentId, Tutor, TutorId};
use crate::error::{Result, RosterError};
use crate::port::outbound::store::RosterStore;

#[derive(Default)]
pub(crate) struct MemoryStore {
    tutors: RefCell<Vec<Tutor>>,
    students: RefCell<Vec<Student>>,
}

impl MemoryStore {
    fn first_tutor(&self, name: &str) -> Option<Tutor> {
        self.tutors.borrow().iter().find(|t| t.name == name).cloned()
    }
}

impl RosterStore for MemoryStore {
    fn reset_schema(&self) -> Result<()> {
        self.tutors.borrow_mut().clear();
        self.students.borrow_mut().clear();
        Ok(())
    }

    fn insert_tutor(&self, name: &str) -> Result<Tutor> {
        let mut tutors = self.tutors.borrow_mut();
        let tutor = Tutor {
            id: TutorId::new(tutors.len() as i32 + 1),
            name: name.to_string(),
        };
        tutors.push(tutor.clone());
        Ok(tutor)
    }

    fn insert_student(&self, student: &NewStudent) -> Result<Student> {
        let tutor = self
            .first_tutor(&student.tutor)
            .ok_or_else(|| RosterError::TutorNotFound {
                name: student.tutor.clone(),
            })?;
        let mut students = self.students.borrow_mut();
        let inserted = Student {
            id: StudentId::new(students.len() as i32 + 1),
            name: student.name.clone(),
            age: student.age,
            grade: student.grade,
            tutor: Some(tutor.name),
        };
        students.push(inserted.clone());
        Ok(inserted)
    }

    fn tutors(&self) -> Result<Vec<Tutor>> {
        Ok(self.tutors.borrow().clone())
    }

    fn students(&self) -> Result<Vec<Student>> {
        Ok(self.students.borrow().clone())
    }

    fn students_by_tutor(&self, tutor: &str) -> Result<Vec<Student>> {
        Ok(self
            .students
            .borrow()
            .iter()
            .filter(|s| s.tutor.as_deref() == Some(tutor))
            .cloned()
            .collect())
    }

    fn reassign_tutor(&self, id: StudentId, tutor: &str) -> Result<Student> {
        let tutor = self
            .first_tutor(tutor)
            .ok_or_else(|| RosterError::TutorNotFound {
                name: tutor.to_string(),
            })?;
        let mut students = self.students.borrow_mut();
        let student = students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RosterError::StudentNotFound { id })?;
        student.tutor = Some(tutor.name);
        Ok(student.clone())
    }

    fn count_by_grade(&self, grade: i32) -> Result<i64> {
        Ok(self
            .students
            .borrow()
            .iter()
            .filter(|s| s.grade == grade)
            .count() as i64)
    }
}
