//! Operator capability surface for the command line.
//!
//! Inbound adapters never read configuration or build stores themselves;
//! they receive a [`RosterOperator`] and ask it for a ready roster.

use std::path::PathBuf;

use crate::error::Result;
use crate::port::outbound::store::RosterStore;

/// Settings the command line passes to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    /// Configuration file to read.
    pub config: PathBuf,
    /// Replaces the configured log level when set.
    pub log_level: Option<String>,
}

/// Locations of the tutor and student datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSources {
    pub tutors: PathBuf,
    pub students: PathBuf,
}

/// A store ready for queries, and the datasets a load should read.
#[derive(Debug)]
pub struct OpenedRoster<S> {
    pub store: S,
    pub datasets: DatasetSources,
}

/// Turns command-line settings into a working roster store.
pub trait RosterOperator {
    type Store: RosterStore;

    /// Load configuration, start logging and open the store.
    ///
    /// The store's tables exist on return; rows already present are kept.
    ///
    /// # Errors
    /// Returns configuration and database errors.
    fn open(&self, request: &OpenRequest) -> Result<OpenedRoster<Self::Store>>;
}
