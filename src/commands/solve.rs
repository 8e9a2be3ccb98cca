//! Word solving command
//!
//! Solves a known target word and returns the solution path.

use crate::core::{CandidateSet, Feedback, Word};
use crate::oracle::{LocalOracle, Oracle};
use crate::solver::entropy::GuessMetrics;
use crate::solver::{
    Outcome, Selection, SolveError, SolveReport, Solver, SolverConfig, SolverObserver, Strategy,
    TurnRecord,
};

/// A single guess step in the solution
#[derive(Debug, Clone, PartialEq)]
pub struct GuessStep {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Score of the guess when the strategy computed one
    pub metrics: Option<GuessMetrics>,
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub outcome: Outcome,
    pub steps: Vec<GuessStep>,
    pub remaining: CandidateSet,
}

/// Observer that turns solver transitions into [`GuessStep`]s
#[derive(Debug, Default, Clone)]
pub struct StepRecorder {
    pending: Option<GuessMetrics>,
    pub steps: Vec<GuessStep>,
}

impl SolverObserver for StepRecorder {
    fn on_guess_selected(&mut self, _turn: usize, selection: &Selection) {
        self.pending = selection.metrics;
    }

    fn on_feedback(&mut self, _turn: usize, record: &TurnRecord, before: usize, after: usize) {
        self.steps.push(GuessStep {
            guess: record.guess.clone(),
            feedback: record.feedback,
            candidates_before: before,
            candidates_after: after,
            metrics: self.pending.take(),
        });
    }
}

/// Solve `target` with a local oracle
///
/// A target outside the vocabulary is not an error: the game ends in
/// [`Outcome::Contradiction`] unless a guess happens to hit it.
///
/// # Errors
///
/// Returns `SolveError::Word` if the target is not a valid 5-letter word.
pub fn solve_word<S: Strategy>(
    target: &str,
    strategy: S,
    vocabulary: CandidateSet,
    config: SolverConfig,
) -> Result<SolveResult, SolveError> {
    let target = Word::new(target)?;

    let mut solver =
        Solver::new(strategy, vocabulary, config).with_observer(StepRecorder::default());
    let report = solver.run(&mut LocalOracle::new(target.clone()))?;

    Ok(SolveResult {
        target,
        outcome: report.outcome,
        steps: solver.into_observer().steps,
        remaining: report.remaining,
    })
}

/// Play a full game against any oracle, reporting through `observer`
///
/// # Errors
///
/// Returns `SolveError::Oracle` if the oracle fails mid-game.
pub fn play<S, R, O>(
    strategy: S,
    vocabulary: CandidateSet,
    config: SolverConfig,
    oracle: &mut R,
    observer: O,
) -> Result<SolveReport, SolveError>
where
    S: Strategy,
    R: Oracle + ?Sized,
    O: SolverObserver,
{
    Solver::new(strategy, vocabulary, config)
        .with_observer(observer)
        .run(oracle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{OracleError, PromptOracle};
    use crate::solver::{EntropyStrategy, RecordingObserver, SequentialStrategy};
    use crate::wordlists::default_vocabulary;
    use std::io::Cursor;

    #[test]
    fn solve_word_succeeds() {
        let result = solve_word(
            "aback",
            EntropyStrategy::default(),
            default_vocabulary().unwrap(),
            SolverConfig::default(),
        )
        .unwrap();

        assert!(result.outcome.is_solved());
        assert!(result.steps.len() <= 6);
        assert_eq!(result.target.text(), "ABACK");
        assert!(result.steps.last().unwrap().feedback.is_solved());
    }

    #[test]
    fn solve_records_history() {
        let result = solve_word(
            "crane",
            EntropyStrategy::default(),
            default_vocabulary().unwrap(),
            SolverConfig::default(),
        )
        .unwrap();

        assert!(!result.steps.is_empty());
        for pair in result.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert!(result.steps[0].metrics.is_some());
    }

    #[test]
    fn solve_with_canonical_opening() {
        let config = SolverConfig::default().with_opening(Some(Word::new("arose").unwrap()));
        let result = solve_word(
            "aback",
            EntropyStrategy::default(),
            default_vocabulary().unwrap(),
            config,
        )
        .unwrap();

        assert_eq!(result.steps[0].guess.text(), "AROSE");
        assert!(result.steps[0].metrics.is_none());
        assert!(result.outcome.is_solved());
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let result = solve_word(
            "abacus",
            EntropyStrategy::default(),
            default_vocabulary().unwrap(),
            SolverConfig::default(),
        );

        assert!(matches!(result, Err(SolveError::Word(_))));
    }

    #[test]
    fn target_outside_vocabulary_is_a_contradiction() {
        let vocabulary: CandidateSet = ["crane", "slate", "trace"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();

        let result = solve_word(
            "fuzzy",
            EntropyStrategy::default(),
            vocabulary,
            SolverConfig::default(),
        )
        .unwrap();

        assert!(matches!(result.outcome, Outcome::Contradiction { .. }));
        assert!(result.remaining.is_empty());
    }

    #[test]
    fn solve_with_max_turns_limit() {
        let result = solve_word(
            "aback",
            SequentialStrategy,
            default_vocabulary().unwrap(),
            SolverConfig::default().with_max_turns(3),
        )
        .unwrap();

        assert_eq!(result.outcome, Outcome::Exhausted { turns: 3 });
        assert_eq!(result.steps.len(), 3);
    }

    #[test]
    fn play_with_typed_feedback() {
        let vocabulary: CandidateSet = ["slate", "zzzzz", "sxxxx", "xlxxx"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let mut oracle = PromptOracle::new(Cursor::new("-----\nwin\n"), Vec::new());

        let report = play(
            EntropyStrategy::default(),
            vocabulary,
            SolverConfig::default(),
            &mut oracle,
            RecordingObserver::default(),
        )
        .unwrap();

        assert_eq!(report.outcome, Outcome::Solved { turns: 2 });
        assert_eq!(report.history[1].guess.text(), "ZZZZZ");
    }

    #[test]
    fn play_surfaces_oracle_errors() {
        let mut oracle = PromptOracle::new(Cursor::new(""), Vec::new());

        let err = play(
            EntropyStrategy::default(),
            default_vocabulary().unwrap(),
            SolverConfig::default(),
            &mut oracle,
            RecordingObserver::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            SolveError::Oracle {
                turn: 1,
                source: OracleError::Closed
            }
        ));
    }
}
