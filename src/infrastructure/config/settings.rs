//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Configuration is loaded from a TOML file; the database url can
//! be overridden with the `ROLLCALL_DATABASE_URL` environment variable.
//!
//! # Example
//!
//! ```no_run
//! use rollcall::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::database::DatabaseConfig;
use super::dataset::DatasetConfig;
use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};

/// Environment variable that replaces `[database] url`.
pub const DATABASE_URL_ENV: &str = "ROLLCALL_DATABASE_URL";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Dataset paths are returned exactly as written. The environment is
    /// not consulted; see [`Config::parse_toml_with_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |_| None)
    }

    /// Parse configuration from TOML content, applying overrides from
    /// `lookup` before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml_with_env<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Replace settings that have an environment override.
    ///
    /// `lookup` maps a variable name to its value; `std::env::var(..).ok()`
    /// in production.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(DATABASE_URL_ENV) {
            self.database.url = url;
        }
    }

    /// Load configuration from a TOML file, honoring `ROLLCALL_DATABASE_URL`.
    ///
    /// Relative dataset paths are resolved against the directory holding
    /// the file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// Load configuration from a TOML file with overrides from `lookup`.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_with_env<P, F>(path: P, lookup: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse_toml_with_env(&content, lookup)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.dataset = config.dataset.resolved_against(base);

        Ok(config)
    }

    /// Initialize tracing from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "url" }.into());
        }
        if self.database.pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pool_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.dataset.tutors.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "tutors" }.into());
        }
        if self.dataset.students.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "students" }.into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected 'pretty' or 'json', got '{}'", self.logging.format),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::path::PathBuf;

    const MINIMAL: &str = r#"
[dataset]
tutors = "tutor.csv"
students = "estudiante.csv"
"#;

    #[test]
    fn minimal_config_applies_defaults() {
        let config = Config::parse_toml(MINIMAL).unwrap();

        assert_eq!(config.database.busy_timeout_ms, 5000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.dataset.tutors, PathBuf::from("tutor.csv"));
    }

    #[test]
    fn missing_dataset_is_rejected() {
        let result = Config::parse_toml("[logging]\nlevel = \"debug\"\n");

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "tutors" }))
        ));
    }

    #[test]
    fn missing_student_dataset_is_rejected() {
        let result = Config::parse_toml("[dataset]\ntutors = \"tutor.csv\"\n");

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "students" }))
        ));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let toml = format!("{MINIMAL}\n[logging]\nformat = \"xml\"\n");

        assert!(matches!(
            Config::parse_toml(&toml),
            Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
        ));
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let toml = format!("{MINIMAL}\n[database]\npool_size = 0\n");

        assert!(matches!(
            Config::parse_toml(&toml),
            Err(Error::Config(ConfigError::InvalidValue { field: "pool_size", .. }))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            Config::parse_toml("[dataset"),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }

    #[test]
    fn env_override_replaces_database_url() {
        let config = Config::parse_toml_with_env(MINIMAL, |key| {
            (key == DATABASE_URL_ENV).then(|| "/var/lib/rollcall/roster.db".to_string())
        })
        .unwrap();

        assert_eq!(config.database.url, "/var/lib/rollcall/roster.db");
    }

    #[test]
    fn env_override_is_applied_before_validation() {
        let toml = format!("{MINIMAL}\n[database]\nurl = \"\"\n");

        assert!(Config::parse_toml(&toml).is_err());
        let config =
            Config::parse_toml_with_env(&toml, |_| Some(":memory:".to_string())).unwrap();
        assert!(config.database.is_in_memory());
    }

    #[test]
    fn unrelated_variables_leave_url_alone() {
        let mut config = Config::parse_toml(MINIMAL).unwrap();

        config.apply_env(|key| (key == "DATABASE_URL").then(|| "other.db".to_string()));

        assert_eq!(config.database.url, "secundaria.db");
    }

    #[test]
    fn load_missing_file_is_a_read_error() {
        assert!(matches!(
            Config::load("/nonexistent/rollcall/config.toml"),
            Err(Error::Config(ConfigError::ReadFile(_)))
        ));
    }
}
