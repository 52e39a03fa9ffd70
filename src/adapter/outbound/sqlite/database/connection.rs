//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling, schema reset, and per-connection pragmas
//! for SQLite databases.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;
use tracing::debug;

use crate::error::{Error, Result};
use crate::infrastructure::config::database::DatabaseConfig;

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Statements that drop the roster tables.
///
/// `estudiante` goes first so the foreign key never points at a dropped table.
pub const DROP_TABLES_DDL: &str = "
DROP TABLE IF EXISTS estudiante;
DROP TABLE IF EXISTS tutor;
";

/// Statements that create the roster tables when they are missing.
pub const CREATE_TABLES_DDL: &str = "
CREATE TABLE IF NOT EXISTS tutor (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS estudiante (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    grade INTEGER NOT NULL,
    tutor_id INTEGER REFERENCES tutor (id)
);
";

/// Applies pragmas to every connection the pool opens.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), diesel::r2d2::Error> {
        configure_sqlite_connection(conn, self.busy_timeout)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a connection pool for the configured database.
///
/// An in-memory database exists only as long as its connection, so the
/// pool is pinned to a single connection that is never recycled.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(config: &DatabaseConfig) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(&config.url);
    let customizer = SqlitePragmas {
        busy_timeout: config.busy_timeout(),
    };

    let builder = Pool::builder().connection_customizer(Box::new(customizer));
    let builder = if config.is_in_memory() {
        builder.max_size(1).idle_timeout(None).max_lifetime(None)
    } else {
        builder.max_size(config.pool_size)
    };

    debug!(url = %config.url, "opening sqlite pool");
    builder
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))
}

/// Create the roster tables if they do not exist yet. Existing rows stay.
///
/// # Errors
/// Returns an error if a connection cannot be acquired or the DDL fails.
pub fn ensure_schema(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
    conn.batch_execute(CREATE_TABLES_DDL)
        .map_err(|e| Error::Database(e.to_string()))?;
    Ok(())
}

/// Drop and recreate the roster tables.
///
/// # Errors
/// Returns an error if a connection cannot be acquired or the DDL fails.
pub fn reset_schema(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
    conn.batch_execute(DROP_TABLES_DDL)
        .and_then(|()| conn.batch_execute(CREATE_TABLES_DDL))
        .map_err(|e| Error::Database(e.to_string()))?;
    Ok(())
}

/// Enable foreign keys and set the busy timeout on a fresh connection.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(
    conn: &mut SqliteConnection,
    busy_timeout: Duration,
) -> diesel::QueryResult<()> {
    conn.batch_execute(&format!(
        "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
        busy_timeout.as_millis()
    ))
}
