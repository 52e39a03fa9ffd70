use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const TUTORS_CSV: &str = "tutor_name\nAna\nLuis\n";
pub const STUDENTS_CSV: &str = "name,age,grade,tutor\nSol,14,2,Ana\nMia,15,3,Luis\n";

/// A directory holding a config file, both datasets and the database.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Workspace with the reference datasets and a relative-path config.
    pub fn new() -> Self {
        Self::with_datasets(TUTORS_CSV, STUDENTS_CSV)
    }

    pub fn with_datasets(tutors: &str, students: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join("tutor.csv"), tutors).expect("write tutors");
        fs::write(dir.path().join("estudiante.csv"), students).expect("write students");

        let config = format!(
            concat!(
                "[database]\n",
                "url = \"{db}\"\n",
                "\n",
                "[dataset]\n",
                "tutors = \"tutor.csv\"\n",
                "students = \"estudiante.csv\"\n",
                "\n",
                "[logging]\n",
                "level = \"warn\"\n",
            ),
            db = dir.path().join("secundaria.db").display()
        );
        fs::write(dir.path().join("config.toml"), config).expect("write config");

        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }
}
