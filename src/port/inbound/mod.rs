//! Inbound ports: what driving adapters ask of the process wiring.

pub mod operator;
