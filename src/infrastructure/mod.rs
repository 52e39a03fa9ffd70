//! Process-level wiring: configuration, store construction and the
//! operator handed to inbound adapters.

pub mod bootstrap;
pub mod config;
pub mod operator;
