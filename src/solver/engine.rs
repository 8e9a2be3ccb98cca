//! Turn-by-turn solver state machine
//!
//! Each turn moves through `Selecting → AwaitingFeedback → Filtering` and
//! ends either in a terminal [`Outcome`] or back in `Selecting` for the next
//! turn.

use super::config::SolverConfig;
use super::filter::filter_candidates;
use super::observer::{NoopObserver, SolverObserver};
use super::strategy::{Selection, Strategy};
use crate::core::{CandidateSet, Feedback, Word, WordError};
use crate::oracle::{Oracle, OracleError};
use log::{debug, info, warn};
use std::fmt;
use thiserror::Error;

/// One played turn: the guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Terminal result of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All-correct feedback was observed on turn `turns`
    Solved { turns: usize },
    /// The turn budget ran out without a solve
    Exhausted { turns: usize },
    /// No candidate is consistent with the observed feedback
    ///
    /// `record` is the turn that emptied the set, or `None` when the solver
    /// started without candidates.
    Contradiction {
        turn: usize,
        record: Option<TurnRecord>,
    },
}

impl Outcome {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    /// Number of guesses played before the game ended
    #[must_use]
    pub const fn turns(&self) -> usize {
        match self {
            Self::Solved { turns } | Self::Exhausted { turns } => *turns,
            Self::Contradiction { turn, record } => {
                if record.is_some() {
                    *turn
                } else {
                    turn.saturating_sub(1)
                }
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved { turns } => write!(f, "solved in {turns} turns"),
            Self::Exhausted { turns } => write!(f, "turn budget exhausted after {turns} turns"),
            Self::Contradiction { turn, .. } => {
                write!(f, "contradiction on turn {turn}: no candidate fits the feedback")
            }
        }
    }
}

/// Where the solver is within the current turn
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Selecting,
    AwaitingFeedback(Selection),
    Finished(Outcome),
}

/// What `next_guess` produced
#[derive(Debug, Clone, PartialEq)]
pub enum Turn {
    Guess(Selection),
    Finished(Outcome),
}

/// Mutable state owned by one solver
#[derive(Debug, Clone)]
pub struct SolverState {
    turn: usize,
    candidates: CandidateSet,
    history: Vec<TurnRecord>,
}

impl SolverState {
    fn new(candidates: CandidateSet) -> Self {
        Self {
            turn: 1,
            candidates,
            history: Vec::new(),
        }
    }

    /// Current turn, 1-based
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }
}

/// Summary of a finished game
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub outcome: Outcome,
    pub history: Vec<TurnRecord>,
    pub remaining: CandidateSet,
    pub strategy: &'static str,
}

/// Errors that abort a solve instead of ending it
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("oracle failed on turn {turn}")]
    Oracle {
        turn: usize,
        #[source]
        source: OracleError,
    },
    #[error(transparent)]
    Word(#[from] WordError),
}

/// Main Wordle solver
///
/// Owns the candidate set and turn history for one game and coordinates the
/// strategy, the candidate filter and the external oracle.
pub struct Solver<S: Strategy, O: SolverObserver = NoopObserver> {
    strategy: S,
    vocabulary: CandidateSet,
    config: SolverConfig,
    state: SolverState,
    phase: Phase,
    observer: O,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver over `vocabulary`
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `vocabulary`: Every possible answer; also the initial candidate set
    /// - `config`: Turn budget and optional fixed opening guess
    #[must_use]
    pub fn new(strategy: S, vocabulary: CandidateSet, config: SolverConfig) -> Self {
        Self {
            strategy,
            state: SolverState::new(vocabulary.clone()),
            vocabulary,
            config,
            phase: Phase::Selecting,
            observer: NoopObserver,
        }
    }
}

impl<S: Strategy, O: SolverObserver> Solver<S, O> {
    /// Replace the observer notified on each transition
    pub fn with_observer<P: SolverObserver>(self, observer: P) -> Solver<S, P> {
        Solver {
            strategy: self.strategy,
            vocabulary: self.vocabulary,
            config: self.config,
            state: self.state,
            phase: self.phase,
            observer,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SolverState {
        &self.state
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Consume the solver, keeping what the observer collected
    pub fn into_observer(self) -> O {
        self.observer
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &CandidateSet {
        &self.vocabulary
    }

    /// Start over with the full vocabulary
    pub fn reset(&mut self) {
        self.state = SolverState::new(self.vocabulary.clone());
        self.phase = Phase::Selecting;
    }

    /// Choose the guess for the current turn
    ///
    /// Repeated calls while awaiting feedback return the same selection. Once
    /// the game is over this returns the terminal outcome.
    pub fn next_guess(&mut self) -> Turn {
        match &self.phase {
            Phase::Finished(outcome) => return Turn::Finished(outcome.clone()),
            Phase::AwaitingFeedback(selection) => return Turn::Guess(selection.clone()),
            Phase::Selecting => {}
        }

        let turn = self.state.turn;
        if turn > self.config.max_turns {
            return Turn::Finished(self.finish(Outcome::Exhausted {
                turns: self.config.max_turns,
            }));
        }

        self.observer.on_turn_start(turn, &self.state.candidates);

        let candidates = self.state.candidates.as_slice();
        let selection = match candidates {
            [] => {
                let record = self.state.history.last().cloned();
                return Turn::Finished(self.finish(Outcome::Contradiction { turn, record }));
            }
            [only] => Selection::unscored(only.clone()),
            [first, ..] => match (&self.config.opening, turn) {
                (Some(opening), 1) => Selection::unscored(opening.clone()),
                _ => self
                    .strategy
                    .select_guess(candidates, self.vocabulary.as_slice())
                    .unwrap_or_else(|| Selection::unscored(first.clone())),
            },
        };

        debug!(
            "turn {turn}: {} picked {} from {} candidates{}",
            self.strategy.name(),
            selection.guess,
            candidates.len(),
            selection
                .metrics
                .map(|m| format!(" ({:.3} bits)", m.entropy))
                .unwrap_or_default()
        );

        self.observer.on_guess_selected(turn, &selection);
        self.phase = Phase::AwaitingFeedback(selection.clone());
        Turn::Guess(selection)
    }

    /// Apply feedback observed for `guess` and advance the state machine
    ///
    /// `guess` need not be the word returned by [`Self::next_guess`], which
    /// lets a caller record a turn it played itself. Returns the outcome if
    /// this turn ended the game. After the game is over the state is left
    /// untouched and the existing outcome is returned.
    pub fn observe(&mut self, guess: &Word, feedback: Feedback) -> Option<Outcome> {
        if let Phase::Finished(outcome) = &self.phase {
            return Some(outcome.clone());
        }

        let turn = self.state.turn;
        let before = self.state.candidates.len();
        let record = TurnRecord {
            guess: guess.clone(),
            feedback,
        };

        let contradiction = match filter_candidates(&self.state.candidates, guess, feedback) {
            Ok(remaining) => {
                self.state.candidates = remaining;
                None
            }
            Err(err) => {
                self.state.candidates = CandidateSet::default();
                Some(err)
            }
        };
        self.state.history.push(record.clone());
        let after = self.state.candidates.len();

        debug!("turn {turn}: {guess} {feedback} left {after} of {before} candidates");
        self.observer.on_feedback(turn, &record, before, after);

        let outcome = match contradiction {
            _ if feedback.is_solved() => Outcome::Solved { turns: turn },
            Some(err) => {
                warn!("turn {turn}: {err}");
                Outcome::Contradiction {
                    turn,
                    record: Some(record),
                }
            }
            None if turn >= self.config.max_turns => Outcome::Exhausted { turns: turn },
            None => {
                self.state.turn += 1;
                self.phase = Phase::Selecting;
                return None;
            }
        };

        Some(self.finish(outcome))
    }

    /// Play until a terminal state, asking `oracle` for feedback each turn
    ///
    /// # Errors
    /// Returns `SolveError::Oracle` if the oracle fails. The solver is left
    /// awaiting feedback for the same guess, so calling `run` again retries.
    pub fn run<R: Oracle + ?Sized>(&mut self, oracle: &mut R) -> Result<SolveReport, SolveError> {
        loop {
            let selection = match self.next_guess() {
                Turn::Guess(selection) => selection,
                Turn::Finished(outcome) => return Ok(self.report(outcome)),
            };

            let feedback = oracle
                .feedback(&selection.guess)
                .map_err(|source| SolveError::Oracle {
                    turn: self.state.turn,
                    source,
                })?;

            self.observe(&selection.guess, feedback);
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        info!("{} {outcome}", self.strategy.name());
        self.observer.on_finished(&outcome, &self.state.history);
        self.phase = Phase::Finished(outcome.clone());
        outcome
    }

    fn report(&self, outcome: Outcome) -> SolveReport {
        SolveReport {
            outcome,
            history: self.state.history.clone(),
            remaining: self.state.candidates.clone(),
            strategy: self.strategy.name(),
        }
    }
}
