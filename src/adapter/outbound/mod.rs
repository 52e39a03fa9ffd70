//! Outbound adapters implementing the ports.

pub mod sqlite;
