//! Astral-style CLI output formatting.
//!
//! Provides consistent terminal output with support for JSON mode (for
//! scripting) and quiet mode. Roster rows render as tables in text mode
//! and as JSON lines in JSON mode.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::domain::{Student, Tutor};
use crate::error::RosterError;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Check if regular (non-JSON) output should be suppressed.
fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

/// Emit a JSON line with type and payload structure.
fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    let config = read_config();
    if config.json || regular_output_suppressed(config) {
        return;
    }

    println!("{} {}", "rollcall".bold(), version.dimmed());
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();
    if config.json || regular_output_suppressed(config) {
        return;
    }

    println!();
    println!("{}", title.bold());
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit_json_line("field", json!({ "label": label, "value": value }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {:<12} {}", label.dimmed(), value);
}

/// Print a success line.
pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    if is_json() {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }

    println!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line.
pub fn error(message: &str) {
    if is_json() {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!("  {} {}", "×".red(), message);
}

/// Print a note/hint.
pub fn note(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("note", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {}", message.dimmed());
}

/// Report a roster condition.
///
/// Zero-result conditions print as notes, lookup failures as warnings.
/// Neither is fatal.
pub fn condition(err: &RosterError) {
    if is_json() {
        emit_json_line(
            "condition",
            json!({
                "informational": err.is_informational(),
                "message": err.to_string(),
            }),
        );
        return;
    }

    if err.is_informational() {
        println!("  {} {}", "∅".cyan(), err);
    } else {
        println!("  {} {}", "⚠".yellow(), err);
    }
}

#[derive(Tabled)]
struct StudentLine<'a> {
    #[tabled(rename = "Id")]
    id: i32,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Age")]
    age: i32,
    #[tabled(rename = "Grade")]
    grade: i32,
    #[tabled(rename = "Tutor")]
    tutor: &'a str,
}

#[derive(Tabled)]
struct TutorLine<'a> {
    #[tabled(rename = "Id")]
    id: i32,
    #[tabled(rename = "Name")]
    name: &'a str,
}

/// Print indented lines of content.
fn lines(content: &str) {
    for line in content.lines() {
        println!("  {line}");
    }
}

/// Print students as a table, or one JSON line per student.
pub fn students(students: &[Student]) {
    let config = read_config();

    if config.json {
        for student in students {
            emit_json_line("student", json!(student));
        }
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    let rows = students.iter().map(|s| StudentLine {
        id: s.id.get(),
        name: &s.name,
        age: s.age,
        grade: s.grade,
        tutor: s.tutor.as_deref().unwrap_or("-"),
    });
    lines(&Table::new(rows).with(Style::rounded()).to_string());
}

/// Print tutors as a table, or one JSON line per tutor.
pub fn tutors(tutors: &[Tutor]) {
    let config = read_config();

    if config.json {
        for tutor in tutors {
            emit_json_line("tutor", json!(tutor));
        }
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    let rows = tutors.iter().map(|t| TutorLine {
        id: t.id.get(),
        name: &t.name,
    });
    lines(&Table::new(rows).with(Style::rounded()).to_string());
}

/// Emit a JSON value directly (for commands that need custom JSON output).
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}

/// Braille spinner animation frames (Astral-style).
const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Create and start a progress spinner.
///
/// Returns a hidden progress bar in JSON or quiet mode.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    let config = read_config();
    if config.json || config.quiet {
        let pb = indicatif::ProgressBar::hidden();
        pb.set_message(message.to_string());
        return pb;
    }

    let pb = indicatif::ProgressBar::new_spinner();
    let style = indicatif::ProgressStyle::default_spinner()
        .tick_strings(BRAILLE_SPINNER)
        .template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Finish a spinner with a success checkmark.
pub fn spinner_success(pb: &indicatif::ProgressBar, message: &str) {
    let config = read_config();
    if config.json || config.quiet {
        pb.finish_and_clear();
        return;
    }

    pb.finish_with_message(format!("{} {}", "✓".green(), message));
}

/// Finish a spinner with a failure mark.
pub fn spinner_fail(pb: &indicatif::ProgressBar, message: &str) {
    if is_json() {
        pb.finish_and_clear();
        return;
    }

    pb.finish_with_message(format!("{} {}", "×".red(), message));
}
