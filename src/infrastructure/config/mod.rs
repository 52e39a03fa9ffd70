//! Configuration sections loaded from the TOML config file.

pub mod database;
pub mod dataset;
pub mod logging;
pub mod settings;

pub use settings::Config;
