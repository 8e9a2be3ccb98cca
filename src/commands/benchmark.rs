//! Benchmark command
//!
//! Tests solver performance across many answers, one independent game per
//! answer, games running in parallel.

use crate::core::{CandidateSet, Word};
use crate::oracle::LocalOracle;
use crate::solver::{Outcome, SolveError, Solver, SolverConfig, Strategy};
use indicatif::ProgressBar;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: usize,
    pub contradictions: usize,
    /// Guesses summed over solved games
    pub total_guesses: usize,
    /// Average over solved games, 0.0 if none were solved
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games by number of guesses
    pub distribution: BTreeMap<usize, usize>,
    /// Answers that were not solved, in target order
    pub failures: Vec<(Word, Outcome)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    fn from_outcomes(outcomes: Vec<(Word, Outcome)>, duration: Duration) -> Self {
        let mut distribution = BTreeMap::new();
        let mut failures = Vec::new();
        let (mut exhausted, mut contradictions) = (0, 0);

        for (target, outcome) in outcomes {
            match outcome {
                Outcome::Solved { turns } => *distribution.entry(turns).or_insert(0) += 1,
                Outcome::Exhausted { .. } => {
                    exhausted += 1;
                    failures.push((target, outcome));
                }
                Outcome::Contradiction { .. } => {
                    contradictions += 1;
                    failures.push((target, outcome));
                }
            }
        }

        let solved: usize = distribution.values().sum();
        let total_guesses: usize = distribution.iter().map(|(turns, count)| turns * count).sum();
        let total_words = solved + exhausted + contradictions;

        Self {
            total_words,
            solved,
            exhausted,
            contradictions,
            total_guesses,
            average_guesses: if solved > 0 {
                total_guesses as f64 / solved as f64
            } else {
                0.0
            },
            min_guesses: distribution.keys().next().copied().unwrap_or(0),
            max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
            distribution,
            failures,
            duration,
            words_per_second: if duration.is_zero() {
                0.0
            } else {
                total_words as f64 / duration.as_secs_f64()
            },
        }
    }

    /// Share of games solved, in percent
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64 * 100.0
        }
    }
}

/// Pick benchmark answers from the vocabulary
///
/// `None` takes every word in order; `Some(n)` draws `n` distinct words with
/// a generator seeded by `seed`, so runs are reproducible.
#[must_use]
pub fn select_targets(vocabulary: &CandidateSet, sample: Option<usize>, seed: u64) -> Vec<Word> {
    match sample {
        None => vocabulary.as_slice().to_vec(),
        Some(amount) => {
            let mut rng = StdRng::seed_from_u64(seed);
            vocabulary
                .as_slice()
                .choose_multiple(&mut rng, amount)
                .cloned()
                .collect()
        }
    }
}

/// Run one game per target word
///
/// Every game gets its own solver over a copy of `vocabulary`. `progress`
/// is advanced once per finished game; pass `ProgressBar::hidden()` to run
/// silently.
///
/// # Errors
///
/// Only fails if a solver reports an error, which a local oracle never
/// causes.
pub fn run_benchmark<S>(
    strategy: &S,
    vocabulary: &CandidateSet,
    targets: &[Word],
    config: &SolverConfig,
    progress: &ProgressBar,
) -> Result<BenchmarkResult, SolveError>
where
    S: Strategy + Clone + Sync,
{
    let start = Instant::now();
    info!(
        "benchmarking {} over {} answers",
        strategy.name(),
        targets.len()
    );

    let outcomes = targets
        .par_iter()
        .map(|target| -> Result<(Word, Outcome), SolveError> {
            let mut solver = Solver::new(strategy.clone(), vocabulary.clone(), config.clone());
            let report = solver.run(&mut LocalOracle::new(target.clone()))?;
            progress.inc(1);
            Ok((target.clone(), report.outcome))
        })
        .collect::<Result<Vec<_>, SolveError>>()?;

    progress.finish_and_clear();
    Ok(BenchmarkResult::from_outcomes(outcomes, start.elapsed()))
}
