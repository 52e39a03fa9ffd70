//! Inbound adapters: the command line and the CSV datasets.

pub mod cli;
pub mod dataset;
