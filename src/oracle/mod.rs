//! Feedback sources
//!
//! An [`Oracle`] answers "what feedback does this guess get?". The solver does
//! not care whether the answer is known locally, typed by a person or fetched
//! from a scoring service.

mod prompt;
pub mod remote;

pub use prompt::PromptOracle;
pub use remote::{RemoteConfig, RemoteMode, RemoteOracle};

use crate::core::{Feedback, Word};
use thiserror::Error;

/// Errors raised while obtaining feedback
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("request to scoring service failed")]
    Transport(#[from] reqwest::Error),
    #[error("scoring service answered with HTTP {0}")]
    Status(u16),
    #[error("could not decode scoring service response")]
    Decode(#[from] serde_json::Error),
    #[error("invalid feedback payload: {0}")]
    Payload(String),
    #[error("failed to read feedback")]
    Io(#[from] std::io::Error),
    #[error("feedback source closed before the game ended")]
    Closed,
}

/// Something that scores guesses against a hidden answer
pub trait Oracle {
    /// Feedback for `guess`
    ///
    /// # Errors
    /// Returns an error when feedback cannot be obtained. The solver keeps
    /// its state unchanged in that case.
    fn feedback(&mut self, guess: &Word) -> Result<Feedback, OracleError>;
}

impl<F> Oracle for F
where
    F: FnMut(&Word) -> Result<Feedback, OracleError>,
{
    fn feedback(&mut self, guess: &Word) -> Result<Feedback, OracleError> {
        self(guess)
    }
}

/// Oracle that knows the answer and scores guesses directly
///
/// # Examples
/// ```
/// use wordle_autosolve::core::{Feedback, Word};
/// use wordle_autosolve::oracle::{LocalOracle, Oracle};
///
/// let mut oracle = LocalOracle::new(Word::new("aback").unwrap());
/// let feedback = oracle.feedback(&Word::new("aback").unwrap()).unwrap();
/// assert_eq!(feedback, Feedback::ALL_CORRECT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalOracle {
    answer: Word,
}

impl LocalOracle {
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self { answer }
    }
}

impl Oracle for LocalOracle {
    fn feedback(&mut self, guess: &Word) -> Result<Feedback, OracleError> {
        Ok(Feedback::calculate(guess, &self.answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn local_oracle_scores_against_answer() {
        let mut oracle = LocalOracle::new(word("aback"));
        let feedback = oracle.feedback(&word("kabab")).unwrap();

        assert_eq!(
            feedback.marks(),
            [
                Mark::Present,
                Mark::Present,
                Mark::Present,
                Mark::Present,
                Mark::Absent
            ]
        );
    }

    #[test]
    fn closures_are_oracles() {
        let mut calls = 0;
        let mut oracle = |_: &Word| -> Result<Feedback, OracleError> {
            calls += 1;
            Ok(Feedback::ALL_CORRECT)
        };

        assert!(oracle.feedback(&word("crane")).unwrap().is_solved());
        assert!(oracle.feedback(&word("slate")).unwrap().is_solved());
        assert_eq!(calls, 2);
    }

    #[test]
    fn trait_objects_work() {
        let mut local = LocalOracle::new(word("crane"));
        let oracle: &mut dyn Oracle = &mut local;
        assert!(oracle.feedback(&word("crane")).unwrap().is_solved());
    }
}
