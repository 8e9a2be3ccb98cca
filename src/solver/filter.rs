//! Candidate pruning from observed feedback

use super::engine::TurnRecord;
use crate::core::{CandidateSet, Feedback, Word};
use thiserror::Error;

/// Raised when observed feedback rules out every candidate
///
/// Usually a vocabulary mismatch (the answer is not in the word list) or
/// corrupted oracle input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("no candidate is consistent with {guess} scoring {feedback}")]
    Contradiction { guess: Word, feedback: Feedback },
}

/// Keep the candidates that would have produced `observed` for `guess`
///
/// The input is not modified; the result preserves candidate order and is
/// always a subset of `candidates`.
///
/// # Errors
/// Returns `FilterError::Contradiction` when no candidate survives.
///
/// # Examples
/// ```
/// use wordle_autosolve::core::{CandidateSet, Feedback, Word};
/// use wordle_autosolve::solver::filter_candidates;
///
/// let candidates: CandidateSet = ["crane", "crate", "slate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("crane").unwrap();
/// let answer = Word::new("crate").unwrap();
///
/// let remaining =
///     filter_candidates(&candidates, &guess, Feedback::calculate(&guess, &answer)).unwrap();
/// assert_eq!(remaining.len(), 1);
/// assert!(remaining.contains(&answer));
/// ```
pub fn filter_candidates(
    candidates: &CandidateSet,
    guess: &Word,
    observed: Feedback,
) -> Result<CandidateSet, FilterError> {
    let survivors: Vec<Word> = candidates
        .iter()
        .filter(|candidate| Feedback::calculate(guess, candidate) == observed)
        .cloned()
        .collect();

    if survivors.is_empty() {
        return Err(FilterError::Contradiction {
            guess: guess.clone(),
            feedback: observed,
        });
    }

    Ok(CandidateSet::from_unique(survivors))
}

/// Check whether `word` would have produced every recorded feedback
#[must_use]
pub fn is_consistent(word: &Word, history: &[TurnRecord]) -> bool {
    history
        .iter()
        .all(|record| Feedback::calculate(&record.guess, word) == record.feedback)
}
