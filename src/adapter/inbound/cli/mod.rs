//! CLI module graph.

pub mod command;
pub mod output;
pub mod prompt;
pub mod roster;
pub mod run;
