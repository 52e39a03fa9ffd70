//! Infrastructure bootstrap helpers for runtime wiring.

use tracing::info;

use crate::adapter::outbound::sqlite::SqliteRosterStore;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Open the configured database and wrap it in a roster store.
///
/// Missing tables are created; existing rows are left as found. Callers
/// decide whether to reset.
///
/// # Errors
/// Returns an error if the connection pool cannot be created or the
/// tables cannot be created.
pub fn build_store(config: &Config) -> Result<SqliteRosterStore> {
    let store = SqliteRosterStore::open(&config.database)?;
    info!(database = %config.database.url, "roster store ready");
    Ok(store)
}
