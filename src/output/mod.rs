//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    ConsoleObserver, benchmark_progress, print_analysis_result, print_benchmark_result,
    print_openings, print_report, print_solve_result,
};
