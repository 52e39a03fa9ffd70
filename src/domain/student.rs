//! Student roster entries.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use super::id::StudentId;

/// Year levels a student is expected to be enrolled in.
pub const GRADE_RANGE: RangeInclusive<i32> = 1..=6;

/// Returns true when `grade` lies in [`GRADE_RANGE`].
#[must_use]
pub fn is_known_grade(grade: i32) -> bool {
    GRADE_RANGE.contains(&grade)
}

/// A student to be enrolled under the tutor with the given name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub age: i32,
    pub grade: i32,
    pub tutor: String,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, age: i32, grade: i32, tutor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            grade,
            tutor: tutor.into(),
        }
    }
}

/// A persisted student with its tutor name resolved.
///
/// `tutor` is `None` only for rows whose tutor reference was never set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: i32,
    pub grade: i32,
    pub tutor: Option<String>,
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student: {}, age {}, grade {}, tutor {}",
            self.name,
            self.age,
            self.grade,
            self.tutor.as_deref().unwrap_or("-")
        )
    }
}
