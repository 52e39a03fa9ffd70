//! Operator prompts for the interactive session.
//!
//! A terminal gets `dialoguer` prompts; anything else (pipes, files, tests)
//! is read one line per answer.

use std::io::{self, BufRead, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{Error, Result};

/// Source of answers to session questions.
pub trait Prompt {
    /// Ask for free text. Surrounding whitespace is removed.
    fn text(&mut self, question: &str) -> Result<String>;

    /// Ask for an integer.
    fn number(&mut self, question: &str) -> Result<i32>;
}

/// Interactive prompts on the controlling terminal.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn text(&mut self, question: &str) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer.trim().to_string())
    }

    fn number(&mut self, question: &str) -> Result<i32> {
        let answer: i32 = Input::with_theme(&self.theme)
            .with_prompt(question)
            .interact_text()?;
        Ok(answer)
    }
}

/// Answers read line by line from any buffered reader.
pub struct LinePrompt<R> {
    input: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    fn read_answer(&mut self, question: &str) -> Result<String> {
        eprint!("{question}: ");
        let _ = io::stderr().flush();

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no answer for '{question}'"),
            )));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn text(&mut self, question: &str) -> Result<String> {
        self.read_answer(question)
    }

    fn number(&mut self, question: &str) -> Result<i32> {
        let answer = self.read_answer(question)?;
        answer.parse().map_err(|_| {
            Error::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("expected an integer for '{question}', got '{answer}'"),
            ))
        })
    }
}
