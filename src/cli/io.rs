//! Console I/O for the CLI
//!
//! - `Prompter`: line-based prompting that re-asks until the input is
//!   valid. End of input is reported as `None` so callers can stop.
//! - JSON responses for the one-shot commands, written to stdout.

use std::io::{self, BufRead, Write};

use serde_json::Value;

use crate::record::{is_name_char, MAX_NAME_CHARS};

use super::errors::CliResult;

/// Reads answers from `input` and writes prompts and messages to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a line of output
    pub fn say(&mut self, text: impl AsRef<str>) -> CliResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Prints `prompt` and reads one line without its line ending.
    pub fn ask(&mut self, prompt: &str) -> CliResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Asks for an integer in `min..=max`.
    pub fn ask_int(&mut self, prompt: &str, min: i64, max: i64) -> CliResult<Option<i64>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Err(_) => self.say("Invalid input. Please enter a whole number.")?,
                Ok(v) if v < min || v > max => {
                    self.say(format!("Error: value must be between {} and {}.", min, max))?
                }
                Ok(v) => return Ok(Some(v)),
            }
        }
    }

    /// Asks for a finite number in `min..=max`.
    pub fn ask_float(&mut self, prompt: &str, min: f64, max: f64) -> CliResult<Option<f64>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v >= min && v <= max => return Ok(Some(v)),
                Ok(_) => self.say(format!("Error: value must be between {} and {}.", min, max))?,
                Err(_) => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }

    /// Asks for a person name. Surrounding spaces are trimmed.
    pub fn ask_name(&mut self, prompt: &str) -> CliResult<Option<String>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            let name = line.trim_matches(' ');

            if name.is_empty() {
                self.say("Error: name must not be empty.")?;
            } else if name.chars().count() > MAX_NAME_CHARS {
                self.say(format!(
                    "Error: name is too long (maximum {} characters).",
                    MAX_NAME_CHARS
                ))?;
            } else if name.chars().any(|c| c.is_ascii_digit()) {
                self.say("Error: name must not contain digits.")?;
            } else if !name.chars().all(is_name_char) {
                self.say("Error: please use Cyrillic or Latin letters only.")?;
                self.say("Example: Иван, Анна-Мария, Сергей")?;
            } else {
                return Ok(Some(name.to_string()));
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
