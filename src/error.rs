use thiserror::Error;

use crate::domain::id::StudentId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Roster conditions raised by the repository operations.
///
/// `TutorNotFound` and `StudentNotFound` abort the operation that raised
/// them. `TutorNotInList` and `GradeNotInList` only describe an empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("tutor '{name}' does not exist")]
    TutorNotFound { name: String },

    #[error("student id {id} does not exist")]
    StudentNotFound { id: StudentId },

    #[error("tutor '{name}' is not in the list")]
    TutorNotInList { name: String },

    #[error("grade {grade} is not in the list")]
    GradeNotInList { grade: i32 },
}

impl RosterError {
    /// Whether this condition is a zero-result report rather than a failure.
    #[must_use]
    pub const fn is_informational(&self) -> bool {
        matches!(self, Self::TutorNotInList { .. } | Self::GradeNotInList { .. })
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("dataset error: {0}")]
    Dataset(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Return the roster condition carried by this error, if any.
    #[must_use]
    pub fn as_roster(&self) -> Option<&RosterError> {
        match self {
            Self::Roster(err) => Some(err),
            _ => None,
        }
    }
}

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        Error::Database(err.to_string())
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
