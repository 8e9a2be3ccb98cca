//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types. Everything here is pure
//! and deterministic.

mod candidates;
mod feedback;
mod word;

pub use candidates::CandidateSet;
pub use feedback::{Feedback, FeedbackParseError, Mark, compute_feedback};
pub use word::{WORD_LENGTH, Word, WordError};
