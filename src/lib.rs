//! Wordle Auto-Solver
//!
//! Plays Wordle by picking, each turn, the guess with the highest expected
//! information gain over the words still possible, then pruning those words
//! with the feedback the guess receives.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_autosolve::core::{Feedback, Word};
//! use wordle_autosolve::oracle::LocalOracle;
//! use wordle_autosolve::solver::{EntropyStrategy, Solver, SolverConfig};
//! use wordle_autosolve::wordlists::parse_word_list;
//!
//! let vocabulary = parse_word_list("crane,slate,trace,crate,aback").unwrap();
//! let mut solver = Solver::new(EntropyStrategy::default(), vocabulary, SolverConfig::default());
//!
//! let report = solver
//!     .run(&mut LocalOracle::new(Word::new("aback").unwrap()))
//!     .unwrap();
//! assert!(report.outcome.is_solved());
//! assert_eq!(report.history.last().unwrap().feedback, Feedback::ALL_CORRECT);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Feedback sources
pub mod oracle;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
