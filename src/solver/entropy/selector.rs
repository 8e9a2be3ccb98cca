//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).

use super::calculator::{GuessMetrics, calculate_metrics};
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// A guess together with its score
#[derive(Debug, Clone, Copy)]
pub struct ScoredGuess<'a> {
    pub word: &'a Word,
    pub metrics: GuessMetrics,
    /// Whether the guess could itself be the answer
    pub is_candidate: bool,
}

impl ScoredGuess<'_> {
    /// Preference order: higher entropy, then possible answers, then the
    /// lexicographically smaller word.
    fn preference(&self, other: &Self) -> Ordering {
        self.metrics
            .entropy
            .total_cmp(&other.metrics.entropy)
            .then(self.is_candidate.cmp(&other.is_candidate))
            .then_with(|| other.word.cmp(self.word))
    }
}

/// Select best guess by maximizing entropy
///
/// Guesses are scored in parallel. The reduction uses a total order, so the
/// result is the same as a sequential scan: highest entropy first, ties going
/// to words that are still possible answers and then to the lexicographically
/// smallest word. Returns `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_autosolve::core::Word;
/// use wordle_autosolve::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let best = select_best_guess(&guesses, &candidates).unwrap();
/// assert_eq!(best.word.text(), "AEROS"); // AEROS splits the candidates, AAAAA doesn't
/// assert!(best.metrics.entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(guess_pool: &'a [Word], candidates: &[Word]) -> Option<ScoredGuess<'a>> {
    let candidate_set: FxHashSet<&Word> = candidates.iter().collect();

    guess_pool
        .par_iter()
        .map(|guess| ScoredGuess {
            word: guess,
            metrics: calculate_metrics(guess, candidates),
            is_candidate: candidate_set.contains(guess),
        })
        .reduce_with(|a, b| match a.preference(&b) {
            Ordering::Less => b,
            _ => a,
        })
}

/// Score every guess in the pool, best first
#[must_use]
pub fn rank_guesses<'a>(guess_pool: &'a [Word], candidates: &[Word], limit: usize) -> Vec<ScoredGuess<'a>> {
    let candidate_set: FxHashSet<&Word> = candidates.iter().collect();

    let mut ranked: Vec<ScoredGuess<'a>> = guess_pool
        .par_iter()
        .map(|guess| ScoredGuess {
            word: guess,
            metrics: calculate_metrics(guess, candidates),
            is_candidate: candidate_set.contains(guess),
        })
        .collect();

    ranked.sort_by(|a, b| b.preference(a));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn selects_highest_entropy() {
        let guesses = words(&["aaaaa", "aeros"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let best = select_best_guess(&guesses, &candidates).unwrap();

        assert_eq!(best.word.text(), "AEROS");
        assert!(best.metrics.entropy > 0.5);
    }

    #[test]
    fn single_guess_returns_that_guess() {
        let guesses = words(&["crane"]);
        let candidates = words(&["slate"]);

        let best = select_best_guess(&guesses, &candidates).unwrap();
        assert_eq!(best.word.text(), "CRANE");
        assert!(!best.is_candidate);
    }

    #[test]
    fn ties_break_lexicographically() {
        // Neither guess shares a letter with the candidate, so both score 0
        let guesses = words(&["bbbbb", "aaaaa", "ddddd"]);
        let candidates = words(&["ccccc"]);

        for _ in 0..10 {
            let best = select_best_guess(&guesses, &candidates).unwrap();
            assert_eq!(best.word.text(), "AAAAA");
        }
    }

    #[test]
    fn ties_prefer_possible_answers() {
        // Against {ABBBB, CBBBB} both AXXXX and CXXXX split perfectly (1 bit),
        // but only CBBBB could also be the answer.
        let guesses = words(&["axxxx", "cbbbb"]);
        let candidates = words(&["abbbb", "cbbbb"]);

        let best = select_best_guess(&guesses, &candidates).unwrap();
        assert!((best.metrics.entropy - 1.0).abs() < 1e-12);
        assert_eq!(best.word.text(), "CBBBB");
        assert!(best.is_candidate);
    }

    #[test]
    fn parallel_matches_sequential_scan() {
        let pool = words(&[
            "crane", "slate", "irate", "crate", "grate", "trace", "raise", "arise", "stare",
            "roast", "toast", "beast", "aback", "abbey",
        ]);

        let best = select_best_guess(&pool, &pool).unwrap();

        let mut sequential: Option<(&Word, f64)> = None;
        for guess in &pool {
            let entropy = calculate_metrics(guess, &pool).entropy;
            let better = match sequential {
                None => true,
                Some((word, e)) => entropy > e || (entropy == e && guess < word),
            };
            if better {
                sequential = Some((guess, entropy));
            }
        }

        let (word, entropy) = sequential.unwrap();
        assert_eq!(best.word, word);
        assert_eq!(best.metrics.entropy.to_bits(), entropy.to_bits());
    }

    #[test]
    fn rank_guesses_is_sorted_and_limited() {
        let pool = words(&["crane", "slate", "irate", "crate", "grate", "aaaaa"]);

        let ranked = rank_guesses(&pool, &pool, 3);
        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].metrics.entropy >= pair[1].metrics.entropy);
        }
        assert_eq!(ranked[0].word, select_best_guess(&pool, &pool).unwrap().word);
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = words(&["slate"]);
        assert!(select_best_guess(&[], &candidates).is_none());
    }
}
