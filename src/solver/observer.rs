//! Callbacks fired on solver state transitions
//!
//! Presentation lives behind this trait so the solver loop itself never
//! prints. Every method has an empty default.

use super::engine::{Outcome, TurnRecord};
use super::strategy::Selection;
use crate::core::CandidateSet;

pub trait SolverObserver {
    /// Entering `Selecting` for `turn` (1-based)
    fn on_turn_start(&mut self, _turn: usize, _candidates: &CandidateSet) {}

    /// A guess was chosen and the solver now awaits feedback
    fn on_guess_selected(&mut self, _turn: usize, _selection: &Selection) {}

    /// Feedback arrived and candidates were filtered
    fn on_feedback(&mut self, _turn: usize, _record: &TurnRecord, _before: usize, _after: usize) {}

    /// A terminal state was reached
    fn on_finished(&mut self, _outcome: &Outcome, _history: &[TurnRecord]) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SolverObserver for NoopObserver {}

/// Observer that records every event, mainly for tests
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingObserver {
    pub events: Vec<String>,
}

impl SolverObserver for RecordingObserver {
    fn on_turn_start(&mut self, turn: usize, candidates: &CandidateSet) {
        self.events
            .push(format!("turn {turn}: {} candidates", candidates.len()));
    }

    fn on_guess_selected(&mut self, turn: usize, selection: &Selection) {
        self.events.push(format!("turn {turn}: guess {}", selection.guess));
    }

    fn on_feedback(&mut self, turn: usize, record: &TurnRecord, before: usize, after: usize) {
        self.events.push(format!(
            "turn {turn}: {} {} ({before} -> {after})",
            record.guess,
            record.feedback.to_emoji()
        ));
    }

    fn on_finished(&mut self, outcome: &Outcome, _history: &[TurnRecord]) {
        self.events.push(format!("finished: {outcome}"));
    }
}
