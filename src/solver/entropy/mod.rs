//! Entropy-based guess scoring
//!
//! Implements Shannon entropy calculation for Wordle feedback distributions.
//! This is the foundation of information-theoretic solving.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_metrics, expected_information, feedback_partitions, shannon_entropy,
};
pub use selector::{ScoredGuess, rank_guesses, select_best_guess};
