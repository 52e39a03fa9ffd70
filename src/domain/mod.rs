//! Roster domain types. No storage or I/O concerns live here.

pub mod id;
pub mod student;
pub mod tutor;

pub use id::{StudentId, TutorId};
pub use student::{is_known_grade, NewStudent, Student, GRADE_RANGE};
pub use tutor::Tutor;
