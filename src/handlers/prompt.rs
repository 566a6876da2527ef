// src/handlers/prompt.rs
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::ValuationError;

/// Asks one question at a time and parses the answer. A bad answer is not
/// asked again: the error goes back to the caller.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Writes `label` and returns the trimmed line typed in reply.
    pub fn text(&mut self, field: &'static str, label: &str) -> Result<String, ValuationError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ValuationError::MissingInput { field });
        }
        Ok(line.trim().to_string())
    }

    pub fn parse<T: FromStr>(&mut self, field: &'static str, label: &str) -> Result<T, ValuationError> {
        let answer = self.text(field, label)?;
        answer
            .parse()
            .map_err(|_| ValuationError::invalid_input(field, answer))
    }

    /// The sink prompts are written to, shared with the report.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}
