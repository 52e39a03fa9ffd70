//! Application layer: roster use cases and bulk loading.

pub mod loader;
pub mod roster;

#[cfg(test)]
mod fake;

pub use loader::{load, LoadReport, LoadSummary, SkippedStudent};
pub use roster::Roster;
