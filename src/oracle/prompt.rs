//! Feedback typed by a person playing the real game

use super::{Oracle, OracleError};
use crate::core::{Feedback, Word};
use log::warn;
use std::io::{BufRead, Write};

/// Oracle that asks for each feedback on a line-oriented stream
///
/// Accepts any notation [`Feedback`] parses ("GY-GY", "21000", emoji) plus
/// "win" as shorthand for all correct. Invalid lines are reported and asked
/// again.
pub struct PromptOracle<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptOracle<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Oracle for PromptOracle<R, W> {
    fn feedback(&mut self, guess: &Word) -> Result<Feedback, OracleError> {
        loop {
            write!(self.output, "Feedback for {guess} (G/Y/-): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(OracleError::Closed);
            }

            let line = line.trim();
            if line.eq_ignore_ascii_case("win") {
                return Ok(Feedback::ALL_CORRECT);
            }

            match line.parse::<Feedback>() {
                Ok(feedback) => return Ok(feedback),
                Err(e) => {
                    warn!("rejected feedback {line:?}: {e}");
                    writeln!(self.output, "Invalid feedback: {e}")?;
                }
            }
        }
    }
}
