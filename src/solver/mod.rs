//! Wordle solving algorithms
//!
//! The solver loop, candidate filtering and the guess selection strategies
//! it can be driven by.

pub mod config;
mod engine;
pub mod entropy;
mod filter;
pub mod observer;
pub mod strategy;

pub use config::{DEFAULT_MAX_TURNS, SolverConfig};
pub use engine::{Outcome, Phase, SolveError, SolveReport, Solver, SolverState, Turn, TurnRecord};
pub use filter::{FilterError, filter_candidates, is_consistent};
pub use observer::{NoopObserver, RecordingObserver, SolverObserver};
pub use strategy::{EntropyStrategy, GuessDomain, Selection, SequentialStrategy, Strategy, StrategyType};
