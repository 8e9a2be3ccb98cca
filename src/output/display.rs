//! Display functions for command results

use super::formatters::{entropy_bar, feedback_tiles};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::{CandidateSet, Word};
use crate::solver::entropy::GuessMetrics;
use crate::solver::{Outcome, Selection, SolveReport, SolverObserver, TurnRecord};
use colored::Colorize;
use indicatif::style::TemplateError;
use indicatif::{ProgressBar, ProgressStyle};

/// Most candidates listed when only a few remain
const SHOW_CANDIDATES: usize = 10;

fn print_outcome(outcome: &Outcome) {
    let line = match outcome {
        Outcome::Solved { turns } => format!("✅ Solved in {turns} guesses!").green().bold(),
        Outcome::Exhausted { turns } => {
            format!("❌ Failed to solve in {turns} guesses").red().bold()
        }
        Outcome::Contradiction { turn, record } => {
            let detail = record
                .as_ref()
                .map(|r| format!(" after {} {}", r.guess, r.feedback))
                .unwrap_or_default();
            format!("⚠️  No word in the list fits the feedback on turn {turn}{detail}")
                .yellow()
                .bold()
        }
    };
    println!("{line}");
}

fn print_candidates(candidates: &CandidateSet) {
    if candidates.len() <= SHOW_CANDIDATES {
        let words: Vec<&str> = candidates.iter().map(Word::text).collect();
        println!("  Candidates: {}", words.join(", ").bright_black());
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}",
            i + 1,
            feedback_tiles(&step.guess, step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(metrics) = step.metrics {
                println!("  Entropy:    {:.3} bits", metrics.entropy);
                println!("  Expected:   {:.1} candidates", metrics.expected_remaining);

                if step.candidates_after > 0 {
                    let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                        reduction.log2()
                    );
                }
            }
        }
    }

    println!();
    print_outcome(&result.outcome);
}

/// Print a game played against an external oracle
pub fn print_report(report: &SolveReport) {
    println!("\n{}", "─".repeat(60).cyan());
    for record in &report.history {
        println!("{}  {}", feedback_tiles(&record.guess, record.feedback), record.feedback);
    }
    println!();
    print_outcome(&report.outcome);
    if !report.outcome.is_solved() {
        print_candidates(&report.remaining);
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.metrics.entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates remain",
        result.metrics.max_partition
    );
    if !result.in_vocabulary {
        println!("   {}", "(not a possible answer)".bright_black());
    }

    if !result.partitions.is_empty() {
        println!("\n🧩 {}", "Largest feedback groups:".bright_cyan().bold());
        for (feedback, count) in &result.partitions {
            println!("   {feedback}  {count:5}");
        }
    }
}

/// Print the best opening guesses for a vocabulary
pub fn print_openings(openings: &[(Word, GuessMetrics)], total_candidates: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BEST OPENINGS".bright_cyan().bold(),
        format!("over {total_candidates} words").bright_black()
    );
    println!("{}", "═".repeat(60).cyan());

    for (rank, (word, metrics)) in openings.iter().enumerate() {
        println!(
            "{:3}. {}  [{}] {:.3} bits, ~{:.1} left, worst {}",
            rank + 1,
            word.text().bright_yellow().bold(),
            entropy_bar(metrics.entropy, 20).green(),
            metrics.entropy,
            metrics.expected_remaining,
            metrics.max_partition
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved,
        result.success_rate()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guess_count, &count) in &result.distribution {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failures.is_empty() {
        println!(
            "\n❌ {} {} exhausted, {} contradictions",
            "Failures:".red().bold(),
            result.exhausted,
            result.contradictions
        );
        for (word, outcome) in result.failures.iter().take(SHOW_CANDIDATES) {
            println!("   {}: {outcome}", word.text());
        }
    }
}

/// Progress bar used for long benchmark runs
///
/// # Errors
/// Returns an error if the progress template is invalid.
pub fn benchmark_progress(len: usize) -> Result<ProgressBar, TemplateError> {
    let bar = ProgressBar::new(len as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {eta}")?
            .progress_chars("█▓▒░"),
    );
    Ok(bar)
}

/// Observer that narrates a live game on stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver {
    /// Also show entropy and candidate lists
    pub verbose: bool,
}

impl ConsoleObserver {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl SolverObserver for ConsoleObserver {
    fn on_turn_start(&mut self, turn: usize, candidates: &CandidateSet) {
        println!(
            "\n{} {}",
            format!("Turn {turn}").bright_cyan().bold(),
            format!("({} candidates)", candidates.len()).bright_black()
        );
        if self.verbose {
            print_candidates(candidates);
        }
    }

    fn on_guess_selected(&mut self, _turn: usize, selection: &Selection) {
        match (self.verbose, selection.metrics) {
            (true, Some(metrics)) => println!(
                "  Guess: {} {}",
                selection.guess.text().bright_yellow().bold(),
                format!(
                    "({:.3} bits, ~{:.1} left)",
                    metrics.entropy, metrics.expected_remaining
                )
                .bright_black()
            ),
            _ => println!("  Guess: {}", selection.guess.text().bright_yellow().bold()),
        }
    }

    fn on_feedback(&mut self, _turn: usize, record: &TurnRecord, before: usize, after: usize) {
        println!(
            "  {}  {before} → {after}",
            feedback_tiles(&record.guess, record.feedback)
        );
    }

    fn on_finished(&mut self, outcome: &Outcome, _history: &[TurnRecord]) {
        println!();
        print_outcome(outcome);
    }
}
