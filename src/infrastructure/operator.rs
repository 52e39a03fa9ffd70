//! Operator implementation for inbound adapters.

use tracing::info;

use crate::adapter::outbound::sqlite::SqliteRosterStore;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_store;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::{DatasetSources, OpenRequest, OpenedRoster, RosterOperator};

/// Reads the TOML configuration and opens the SQLite store it names.
#[derive(Debug, Clone, Copy, Default)]
pub struct Operator;

impl RosterOperator for Operator {
    type Store = SqliteRosterStore;

    fn open(&self, request: &OpenRequest) -> Result<OpenedRoster<SqliteRosterStore>> {
        let mut config = Config::load(&request.config)?;
        if let Some(level) = &request.log_level {
            config.logging.level.clone_from(level);
        }
        config.init_logging();
        info!(config = %request.config.display(), "rollcall starting");

        let store = build_store(&config)?;
        Ok(OpenedRoster {
            store,
            datasets: DatasetSources {
                tutors: config.dataset.tutors,
                students: config.dataset.students,
            },
        })
    }
}
