//! Shannon entropy calculation for Wordle feedback patterns
//!
//! Given a guess and a set of candidates, computes the expected information gain.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

impl GuessMetrics {
    /// Metrics of a guess against an empty candidate set
    pub const EMPTY: Self = Self {
        entropy: 0.0,
        expected_remaining: 0.0,
        max_partition: 0,
    };
}

/// Expected information (bits) a guess extracts from the candidate set
///
/// Every candidate is treated as the hypothetical answer; candidates are
/// grouped by the feedback they would produce and the Shannon entropy of that
/// distribution is returned.
///
/// # Formula
/// H = Σ p · log₂(1/p), with p = c/n for each feedback group of size c
///
/// # Examples
/// ```
/// use wordle_autosolve::core::Word;
/// use wordle_autosolve::solver::entropy::expected_information;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let bits = expected_information(&guess, &candidates);
/// assert!(bits > 0.0 && bits <= 1.0); // log2(2) = 1 bit max
/// assert_eq!(expected_information(&guess, &[]), 0.0);
/// ```
#[must_use]
pub fn expected_information(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_feedback(guess, candidates))
}

/// Count candidates per feedback pattern the guess would produce
pub(crate) fn group_by_feedback(guess: &Word, candidates: &[Word]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        *counts.entry(Feedback::calculate(guess, candidate)).or_insert(0) += 1;
    }

    counts
}

/// Feedback groups a guess splits the candidates into, largest first
///
/// Groups of equal size are ordered by feedback value.
#[must_use]
pub fn feedback_partitions(guess: &Word, candidates: &[Word]) -> Vec<(Feedback, usize)> {
    let mut partitions: Vec<(Feedback, usize)> =
        group_by_feedback(guess, candidates).into_iter().collect();
    partitions.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    partitions
}

/// Calculate Shannon entropy from a feedback distribution
///
/// Counts are summed in ascending order, so two distributions with the same
/// multiset of group sizes always give bit-identical results regardless of
/// map iteration order. Zero counts are skipped.
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one pattern with p=1)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Feedback, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let mut counts: Vec<usize> = pattern_counts
        .values()
        .copied()
        .filter(|&count| count > 0)
        .collect();
    counts.sort_unstable();

    let total = counts.iter().sum::<usize>() as f64;
    if total == 0.0 {
        return 0.0;
    }

    counts
        .into_iter()
        .map(|count| {
            let p = count as f64 / total;
            p * (total / count as f64).log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics::EMPTY;
    }

    let groups = group_by_feedback(guess, candidates);
    let total = candidates.len() as f64;

    let entropy = shannon_entropy(&groups);

    // Σ p·c: the size of the group the true answer falls into, on average
    let expected_remaining: f64 = groups
        .values()
        .map(|&count| count as f64 * count as f64 / total)
        .sum();

    let max_partition = groups.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}
