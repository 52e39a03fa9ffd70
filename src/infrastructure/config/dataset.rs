//! Locations of the CSV files fed to the bulk loader.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Dataset file paths.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetConfig {
    /// CSV with a `tutor_name` column.
    #[serde(default, alias = "tut")]
    pub tutors: PathBuf,
    /// CSV with `name`, `age`, `grade` and `tutor` columns.
    #[serde(default, alias = "estud")]
    pub students: PathBuf,
}

impl DatasetConfig {
    /// Rebase relative paths onto `base`. Absolute paths are kept.
    #[must_use]
    pub fn resolved_against(self, base: &Path) -> Self {
        Self {
            tutors: base.join(self.tutors),
            students: base.join(self.students),
        }
    }
}
