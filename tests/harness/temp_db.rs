use tempfile::TempDir;

use rollcall::adapter::outbound::sqlite::database::connection::{create_pool, DbPool};
use rollcall::adapter::outbound::sqlite::SqliteRosterStore;
use rollcall::application::Roster;
use rollcall::infrastructure::config::database::DatabaseConfig;

/// Temporary file-backed SQLite database for integration tests.
pub struct TempDb {
    // Held so the directory outlives the pool.
    _dir: TempDir,
    pool: DbPool,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(format!("rollcall-{name}.db"));

        let config = DatabaseConfig {
            url: path.display().to_string(),
            ..DatabaseConfig::default()
        };
        let pool = create_pool(&config).expect("create sqlite pool");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// A roster over a fresh schema.
    pub fn roster(&self) -> Roster<SqliteRosterStore> {
        let roster = Roster::new(SqliteRosterStore::new(self.pool.clone()));
        roster.reset().expect("reset schema");
        roster
    }
}
