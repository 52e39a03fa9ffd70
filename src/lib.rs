//! Rollcall - a school roster of tutors and students backed by SQLite.
//!
//! A tutor has many students; every student belongs to exactly one tutor.
//! Rows are loaded in bulk from two CSV datasets and then searched,
//! reassigned and counted through a small set of repository operations.
//!
//! # Modules
//!
//! - [`domain`] - Tutor and student types, row identifiers
//! - [`port`] - The [`port::RosterStore`] persistence trait and the
//!   [`port::RosterOperator`] the command line is driven through
//! - [`application`] - Roster use cases and the bulk loader
//! - [`adapter`] - SQLite store (Diesel), CSV readers, command line
//! - [`infrastructure`] - TOML configuration, store wiring and the operator
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use rollcall::adapter::outbound::sqlite::database::connection::create_pool;
//! use rollcall::adapter::outbound::sqlite::SqliteRosterStore;
//! use rollcall::application::Roster;
//! use rollcall::domain::NewStudent;
//! use rollcall::infrastructure::config::database::DatabaseConfig;
//!
//! # fn main() -> rollcall::error::Result<()> {
//! let roster = Roster::new(SqliteRosterStore::new(create_pool(&DatabaseConfig::default())?));
//! roster.reset()?;
//! roster.add_tutor("Ana")?;
//! roster.enroll(&NewStudent::new("Sol", 14, 2, "Ana"))?;
//! assert_eq!(roster.count_grade(2)?, 1);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
