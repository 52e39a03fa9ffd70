//! Command-line interface definitions.
//!
//! Defines the CLI structure for the rollcall application using `clap`.
//! Without a subcommand the full interactive session runs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// School roster of tutors and students
#[derive(Parser, Debug)]
#[command(name = "rollcall")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands for the rollcall CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reset, load the datasets, then prompt for search, reassign and count (default)
    Run,

    /// Reset the database and load both datasets
    Load,

    /// List every student with their tutor
    Students,

    /// List every tutor
    Tutors,

    /// List students assigned to a tutor
    Search(SearchArgs),

    /// Move a student to another tutor
    Reassign(ReassignArgs),

    /// Count students enrolled in a grade
    Count(CountArgs),
}

/// Arguments for `rollcall search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Tutor name, matched exactly
    pub tutor: String,
}

/// Arguments for `rollcall reassign`.
#[derive(Args, Debug)]
pub struct ReassignArgs {
    /// Student id
    pub student_id: i32,

    /// Name of the new tutor
    pub tutor: String,
}

/// Arguments for `rollcall count`.
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Grade to count
    #[arg(allow_negative_numbers = true)]
    pub grade: i32,
}
