use std::fmt;

use serde::Serialize;

use super::id::TutorId;

/// A guardian linked to one or more students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tutor {
    pub id: TutorId,
    pub name: String,
}

impl fmt::Display for Tutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tutor: {}", self.name)
    }
}
