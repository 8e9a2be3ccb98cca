//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word.

use crate::core::{CandidateSet, Feedback, Word, WordError};
use crate::solver::entropy::{GuessMetrics, calculate_metrics, feedback_partitions, rank_guesses};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
    /// Whether the word could itself be the answer
    pub in_vocabulary: bool,
    /// Largest feedback groups, biggest first
    pub partitions: Vec<(Feedback, usize)>,
}

impl AnalysisResult {
    /// How many times smaller the candidate set gets on average, 2^H
    #[must_use]
    pub fn expected_reduction(&self) -> f64 {
        self.metrics.entropy.exp2()
    }
}

/// Analyze the entropy of a word against a set of candidates
///
/// The word need not be in the vocabulary; any valid word can be scored.
///
/// # Errors
///
/// Returns `WordError` if the word is not 5 ASCII letters.
pub fn analyze_word(
    word: &str,
    candidates: &CandidateSet,
    top_partitions: usize,
) -> Result<AnalysisResult, WordError> {
    let word = Word::new(word)?;

    let metrics = calculate_metrics(&word, candidates.as_slice());
    let mut partitions = feedback_partitions(&word, candidates.as_slice());
    partitions.truncate(top_partitions);

    Ok(AnalysisResult {
        in_vocabulary: candidates.contains(&word),
        word,
        metrics,
        total_candidates: candidates.len(),
        partitions,
    })
}

/// Best opening guesses for a vocabulary, best first
#[must_use]
pub fn best_openings(vocabulary: &CandidateSet, limit: usize) -> Vec<(Word, GuessMetrics)> {
    rank_guesses(vocabulary.as_slice(), vocabulary.as_slice(), limit)
        .into_iter()
        .map(|scored| (scored.word.clone(), scored.metrics))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::default_vocabulary;

    #[test]
    fn analyze_valid_word() {
        let words = default_vocabulary().unwrap();

        let result = analyze_word("aback", &words, 5).unwrap();

        assert_eq!(result.word.text(), "ABACK");
        assert!(result.in_vocabulary);
        assert!(result.metrics.entropy > 0.0);
        assert!(result.expected_reduction() >= 1.0);
        assert_eq!(result.total_candidates, words.len());
        assert_eq!(result.partitions.len(), 5);
        assert_eq!(result.partitions[0].1, result.metrics.max_partition);
    }

    #[test]
    fn analyze_word_outside_vocabulary() {
        let words = default_vocabulary().unwrap();

        let result = analyze_word("qajaq", &words, 3).unwrap();
        assert!(!result.in_vocabulary);
        assert!(result.metrics.entropy >= 0.0);
    }

    #[test]
    fn analyze_invalid_word() {
        let words = default_vocabulary().unwrap();

        assert!(analyze_word("abacus", &words, 3).is_err());
        assert!(analyze_word("ab4ck", &words, 3).is_err());
    }

    #[test]
    fn entropy_properties() {
        let words = default_vocabulary().unwrap();

        let result = analyze_word("arose", &words, usize::MAX).unwrap();

        assert!(result.metrics.entropy <= (words.len() as f64).log2());
        assert!(result.metrics.expected_remaining >= 1.0);
        assert!(result.metrics.expected_remaining <= words.len() as f64);

        let grouped: usize = result.partitions.iter().map(|(_, count)| count).sum();
        assert_eq!(grouped, words.len());
    }

    #[test]
    fn best_openings_are_ranked() {
        let words = default_vocabulary().unwrap();

        let openings = best_openings(&words, 5);

        assert_eq!(openings.len(), 5);
        for pair in openings.windows(2) {
            assert!(pair[0].1.entropy >= pair[1].1.entropy);
        }
        let arose = analyze_word("arose", &words, 0).unwrap();
        assert!(openings[0].1.entropy >= arose.metrics.entropy);
    }
}
