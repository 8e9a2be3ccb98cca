//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::entropy::{GuessMetrics, select_best_guess};
use crate::core::Word;
use std::fmt;
use std::str::FromStr;

/// The word chosen for a turn, with its score when one was computed
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub guess: Word,
    pub metrics: Option<GuessMetrics>,
}

impl Selection {
    /// A guess picked without scoring
    #[must_use]
    pub const fn unscored(guess: Word) -> Self {
        Self {
            guess,
            metrics: None,
        }
    }
}

/// A strategy for selecting the next guess
///
/// Implementations only decide *which* word to play; the solver loop owns the
/// state, filtering and termination.
pub trait Strategy {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Select a guess given the current candidates and the original vocabulary
    ///
    /// Returns `None` only if there is nothing to choose from.
    fn select_guess(&self, candidates: &[Word], vocabulary: &[Word]) -> Option<Selection>;
}

/// Which words the entropy strategy is allowed to guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuessDomain {
    /// Only words that are still possible answers
    #[default]
    Candidates,
    /// Any word from the original vocabulary, including eliminated ones
    Vocabulary,
}

impl FromStr for GuessDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "candidates" => Ok(Self::Candidates),
            "vocabulary" | "all" => Ok(Self::Vocabulary),
            other => Err(format!("unknown guess domain: {other}")),
        }
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the guess with the highest Shannon entropy over the current
/// candidates, searching the configured [`GuessDomain`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntropyStrategy {
    pub domain: GuessDomain,
}

impl EntropyStrategy {
    #[must_use]
    pub const fn new(domain: GuessDomain) -> Self {
        Self { domain }
    }
}

impl Strategy for EntropyStrategy {
    fn name(&self) -> &'static str {
        match self.domain {
            GuessDomain::Candidates => "entropy",
            GuessDomain::Vocabulary => "entropy (full vocabulary)",
        }
    }

    fn select_guess(&self, candidates: &[Word], vocabulary: &[Word]) -> Option<Selection> {
        if candidates.is_empty() {
            return None;
        }

        let pool = match self.domain {
            GuessDomain::Candidates => candidates,
            GuessDomain::Vocabulary => vocabulary,
        };

        select_best_guess(pool, candidates).map(|best| Selection {
            guess: best.word.clone(),
            metrics: Some(best.metrics),
        })
    }
}

/// Fixed-order strategy without scoring
///
/// Plays the last remaining candidate in list order, like popping from the
/// end of the candidate list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequentialStrategy;

impl Strategy for SequentialStrategy {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn select_guess(&self, candidates: &[Word], _vocabulary: &[Word]) -> Option<Selection> {
        candidates.last().cloned().map(Selection::unscored)
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Entropy maximization
    Entropy(EntropyStrategy),
    /// Fixed order, no scoring
    Sequential(SequentialStrategy),
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Entropy(EntropyStrategy::default())
    }
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Entropy(s) => s.name(),
            Self::Sequential(s) => s.name(),
        }
    }

    fn select_guess(&self, candidates: &[Word], vocabulary: &[Word]) -> Option<Selection> {
        match self {
            Self::Entropy(s) => s.select_guess(candidates, vocabulary),
            Self::Sequential(s) => s.select_guess(candidates, vocabulary),
        }
    }
}

impl StrategyType {
    /// Build a strategy from its name and, for entropy, the guess domain
    ///
    /// Supported names: "entropy", "sequential" (alias "naive").
    ///
    /// # Errors
    /// Returns a message naming the unknown strategy.
    pub fn from_name(name: &str, domain: GuessDomain) -> Result<Self, String> {
        match name.to_ascii_lowercase().as_str() {
            "entropy" => Ok(Self::Entropy(EntropyStrategy::new(domain))),
            "sequential" | "naive" => Ok(Self::Sequential(SequentialStrategy)),
            other => Err(format!("unknown strategy: {other}")),
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
