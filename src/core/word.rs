//! Wordle word representation
//!
//! A Word stores a 5-letter word in its canonical uppercase form.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word, guess and feedback pattern
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word, normalized to uppercase
///
/// Ordering is lexicographic on the canonical text, which the solver relies on
/// for deterministic tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("word must contain only ASCII letters: {0:?}")]
    NonAlphabetic(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError::LengthMismatch` if the input is not exactly 5
    /// characters and `WordError::NonAlphabetic` if any character is not an
    /// ASCII letter. Input is never truncated or padded.
    ///
    /// # Examples
    /// ```
    /// use wordle_autosolve::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        let actual = text.chars().count();
        if actual != WORD_LENGTH {
            return Err(WordError::LengthMismatch {
                expected: WORD_LENGTH,
                actual,
            });
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic(text.to_string()));
        }

        let text = text.to_ascii_uppercase();
        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as an uppercase byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Multiplicity of every letter, indexed `A..=Z`
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &ch in &self.chars {
            counts[letter_index(ch)] += 1;
        }
        counts
    }
}

/// Index of an uppercase ASCII letter in a 26-slot table
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
