//! Solver configuration

use crate::core::Word;

/// Standard Wordle turn budget
pub const DEFAULT_MAX_TURNS: usize = 6;

/// Settings fixed for the lifetime of one solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Turns allowed before the game counts as exhausted
    pub max_turns: usize,
    /// Fixed first guess; skips scoring on turn 1
    pub opening: Option<Word>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            opening: None,
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub fn with_opening(mut self, opening: Option<Word>) -> Self {
        self.opening = opening;
        self
    }
}
