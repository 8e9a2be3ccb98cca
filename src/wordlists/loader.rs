//! Word list loading utilities
//!
//! Word lists are plain text with entries separated by commas and/or
//! whitespace. Every entry is validated up front so a bad list fails before
//! any solving begins.

use crate::core::{CandidateSet, Word, WordError};
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a vocabulary
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list contains no words")]
    Empty,
    #[error("entry {index} ({entry:?}) is not a valid word")]
    Malformed {
        index: usize,
        entry: String,
        #[source]
        source: WordError,
    },
}

/// Parse a word list into a candidate set
///
/// Entries are uppercased; empty entries (trailing commas, blank lines) are
/// skipped. Duplicates keep their first occurrence.
///
/// # Errors
/// Returns `VocabularyError::Malformed` for the first entry that is not a
/// 5-letter word (`index` counts non-empty entries from 0), and
/// `VocabularyError::Empty` if no entries remain.
///
/// # Examples
/// ```
/// use wordle_autosolve::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("aback,arose,\ncrane").unwrap();
/// assert_eq!(words.len(), 3);
/// assert_eq!(words.first().unwrap().text(), "ABACK");
///
/// assert!(parse_word_list("aback,abacus").is_err());
/// ```
pub fn parse_word_list(content: &str) -> Result<CandidateSet, VocabularyError> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    let entries = content
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|entry| !entry.is_empty());

    for (index, entry) in entries.enumerate() {
        let word = Word::new(entry).map_err(|source| VocabularyError::Malformed {
            index,
            entry: entry.to_string(),
            source,
        })?;

        if seen.insert(word.clone()) {
            words.push(word);
        } else {
            warn!("dropping duplicate word list entry {word}");
        }
    }

    if words.is_empty() {
        return Err(VocabularyError::Empty);
    }

    Ok(CandidateSet::from_unique(words))
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns `VocabularyError::Io` if the file cannot be read, and any error
/// [`parse_word_list`] reports for its contents.
///
/// # Examples
/// ```no_run
/// use wordle_autosolve::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CandidateSet, VocabularyError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content)?;
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
