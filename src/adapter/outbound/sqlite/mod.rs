//! SQLite persistence adapters.
//!
//! Provides the SQLite-backed roster store using Diesel ORM.

pub mod database;
pub mod store;

pub use store::SqliteRosterStore;
