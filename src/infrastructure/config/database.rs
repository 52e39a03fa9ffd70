//! SQLite database configuration.

use std::time::Duration;

use serde::Deserialize;

/// Database connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database path, or `:memory:`.
    #[serde(default = "default_url")]
    pub url: String,
    /// How long a connection waits on a locked database (milliseconds).
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
    /// Maximum pooled connections for file-backed databases.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

fn default_url() -> String {
    "secundaria.db".into()
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

fn default_pool_size() -> u32 {
    1
}

impl DatabaseConfig {
    /// Settings for a private in-memory database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: ":memory:".into(),
            ..Self::default()
        }
    }

    /// True when the url names an in-memory database.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.url == ":memory:" || self.url.starts_with("file::memory:")
    }

    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            busy_timeout_ms: default_busy_timeout_ms(),
            pool_size: default_pool_size(),
        }
    }
}
