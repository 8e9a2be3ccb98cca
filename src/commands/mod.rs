//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word, best_openings};
pub use benchmark::{BenchmarkResult, run_benchmark, select_targets};
pub use solve::{GuessStep, SolveResult, StepRecorder, play, solve_word};
