//! Terminal input helpers with universal cancellation.
//!
//! Every prompt in the application goes through these helpers, and every
//! one of them recognizes a case-insensitive `exit` keyword as a cancel
//! signal. Outcomes are an explicit three-way result rather than sentinel
//! values: a validated value, an empty-input signal (only where a prompt
//! allows it), or cancellation. Cancellation propagates to the caller by
//! ordinary control flow and aborts the enclosing multi-step operation.
//!
//! The raw line read sits behind the [`LineReader`] trait so interactive
//! flows can be driven by scripted input in tests; the [`Console`]
//! implementation renders prompts with dialoguer like the rest of the
//! application.

use crate::libs::messages::Message;
use crate::msg_error;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

/// Reserved keyword that cancels the current operation at any prompt.
pub const EXIT_COMMAND: &str = "exit";

/// Outcome of a single prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptValue<T> {
    Value(T),
    Empty,
    Cancel,
}

/// Source of raw prompt lines.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Interactive reader backed by the terminal.
pub struct Console;

impl LineReader for Console {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let line: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }
}

pub fn is_exit_command(input: &str) -> bool {
    input.eq_ignore_ascii_case(EXIT_COMMAND)
}

/// Reads one line of text, trimmed.
///
/// The exit keyword cancels; anything else, including an empty line, comes
/// back as a value for the caller to validate.
pub fn read_text<R: LineReader>(reader: &mut R, prompt: &str) -> Result<PromptValue<String>> {
    let line = reader.read_line(prompt)?;
    let line = line.trim();
    if is_exit_command(line) {
        return Ok(PromptValue::Cancel);
    }
    Ok(PromptValue::Value(line.to_string()))
}

/// Reads text until the caller's predicate accepts it.
///
/// Rejected input shows the caller's error message and re-prompts. The exit
/// keyword bypasses the predicate and cancels.
pub fn read_text_validated<R, F>(reader: &mut R, prompt: &str, validate: F, error: Message) -> Result<PromptValue<String>>
where
    R: LineReader,
    F: Fn(&str) -> bool,
{
    loop {
        match read_text(reader, prompt)? {
            PromptValue::Value(value) if !validate(&value) => msg_error!(error.clone()),
            outcome => return Ok(outcome),
        }
    }
}

/// Reads an integer within `min..=max`.
///
/// The exit keyword cancels; a blank line yields [`PromptValue::Empty`]
/// when `allow_empty` is set. Non-numeric input re-prompts with an
/// invalid-number message, out-of-range input with an invalid-choice
/// message naming the valid range. Loops until a valid outcome.
pub fn read_bounded_int<R: LineReader>(reader: &mut R, prompt: &str, min: i64, max: i64, allow_empty: bool) -> Result<PromptValue<i64>> {
    loop {
        let line = reader.read_line(prompt)?;
        let line = line.trim();
        if is_exit_command(line) {
            return Ok(PromptValue::Cancel);
        }
        if allow_empty && line.is_empty() {
            return Ok(PromptValue::Empty);
        }
        match line.parse::<i64>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(PromptValue::Value(value)),
            Ok(_) => msg_error!(Message::InvalidChoice(format!("{}-{}", min, max))),
            Err(_) => msg_error!(Message::InvalidNumber),
        }
    }
}
