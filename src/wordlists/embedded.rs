//! Embedded word list
//!
//! A small default vocabulary compiled into the binary.

/// Comma-delimited default vocabulary
pub const DEFAULT_WORDS: &str = include_str!("../../data/words.txt");
