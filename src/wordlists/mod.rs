//! Word lists for Wordle solving
//!
//! Loads comma-delimited vocabularies from disk and provides an embedded
//! default.

mod embedded;
pub mod loader;

pub use embedded::DEFAULT_WORDS;
pub use loader::{VocabularyError, load_from_file, parse_word_list};

use crate::core::CandidateSet;
use std::path::Path;

/// The embedded vocabulary
///
/// # Errors
/// Only fails if the embedded list itself is malformed.
pub fn default_vocabulary() -> Result<CandidateSet, VocabularyError> {
    parse_word_list(DEFAULT_WORDS)
}

/// Load `path` if given, otherwise the embedded vocabulary
///
/// # Errors
/// Returns any error raised while reading or validating the list.
pub fn load_vocabulary(path: Option<&Path>) -> Result<CandidateSet, VocabularyError> {
    path.map_or_else(default_vocabulary, load_from_file)
}
