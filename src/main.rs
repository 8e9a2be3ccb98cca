//! Wordle Auto-Solver - CLI
//!
//! Solves known words, assists a real game with typed feedback, plays against
//! the remote scoring service and benchmarks strategies.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{LevelFilter, info, warn};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use wordle_autosolve::{
    commands::{analyze_word, best_openings, play, run_benchmark, select_targets, solve_word},
    core::{CandidateSet, Word},
    oracle::{PromptOracle, RemoteConfig, RemoteMode, RemoteOracle, remote::DEFAULT_BASE_URL},
    output::{
        ConsoleObserver, benchmark_progress, print_analysis_result, print_benchmark_result,
        print_openings, print_report, print_solve_result,
    },
    solver::{DEFAULT_MAX_TURNS, GuessDomain, NoopObserver, Outcome, SolverConfig, StrategyType},
    wordlists::load_vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_autosolve",
    about = "Wordle auto-solver driven by expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: entropy (default) or sequential
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: String,

    /// Words the entropy strategy may guess: candidates (default) or vocabulary
    #[arg(short, long, global = true, default_value = "candidates")]
    domain: GuessDomain,

    /// Comma-delimited word list (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Fixed first guess, e.g. AROSE
    #[arg(short, long, global = true)]
    opening: Option<String>,

    /// Turn budget
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show entropy and candidate counts per turn
        #[arg(long)]
        details: bool,
    },

    /// Assist a real game: suggests guesses, you type the feedback
    Play,

    /// Play against the remote scoring service
    Remote {
        /// Which answer the service scores against
        #[arg(long, value_enum, default_value_t = ModeArg::Daily)]
        mode: ModeArg,

        /// Seed for random mode
        #[arg(long)]
        seed: Option<u64>,

        /// Answer for word mode
        #[arg(long)]
        target: Option<String>,

        /// Service base URL
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        url: String,

        /// Per-request timeout in seconds (0 disables)
        #[arg(long, default_value_t = 10)]
        timeout: u64,
    },

    /// Analyze the entropy of a word, or list the best openings
    Analyze {
        /// Word to analyze; omit to rank openings
        word: Option<String>,

        /// Number of feedback groups or openings to show
        #[arg(short = 'n', long, default_value_t = 10)]
        top: usize,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random answers to test (default: every word)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for sampling answers
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Daily,
    Random,
    Word,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn solver_config(opening: Option<&str>, max_turns: usize) -> Result<SolverConfig> {
    let opening = opening
        .map(Word::new)
        .transpose()
        .context("invalid opening word")?;

    Ok(SolverConfig::default()
        .with_max_turns(max_turns)
        .with_opening(opening))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let vocabulary =
        load_vocabulary(cli.wordlist.as_deref()).context("failed to load word list")?;
    info!("loaded {} words", vocabulary.len());

    let strategy =
        StrategyType::from_name(&cli.strategy, cli.domain).map_err(anyhow::Error::msg)?;
    let config = solver_config(cli.opening.as_deref(), cli.max_turns)?;

    match cli.command {
        Commands::Solve { word, details } => {
            run_solve_command(&word, details, strategy, vocabulary, config)
        }
        Commands::Play => run_play_command(strategy, vocabulary, config, cli.verbose > 0),
        Commands::Remote {
            mode,
            seed,
            target,
            url,
            timeout,
        } => {
            let mode = match (mode, target) {
                (ModeArg::Daily, _) => RemoteMode::Daily,
                (ModeArg::Random, _) => RemoteMode::Random { seed },
                (ModeArg::Word, Some(target)) => {
                    RemoteMode::word(&target).context("invalid --target")?
                }
                (ModeArg::Word, None) => bail!("--mode word needs --target"),
            };
            let remote = RemoteConfig {
                base_url: url,
                mode,
                timeout: (timeout > 0).then(|| Duration::from_secs(timeout)),
            };
            run_remote_command(remote, strategy, vocabulary, config)
        }
        Commands::Analyze { word, top } => {
            run_analyze_command(word.as_deref(), top, &vocabulary)
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed, strategy, &vocabulary, &config)
        }
    }
}

fn run_solve_command(
    word: &str,
    details: bool,
    strategy: StrategyType,
    vocabulary: CandidateSet,
    config: SolverConfig,
) -> Result<()> {
    let result = solve_word(word, strategy, vocabulary, config)?;

    print_solve_result(&result, details);
    if let Outcome::Contradiction { .. } = result.outcome {
        warn!("{} is probably not in the word list", result.target);
    }
    Ok(())
}

fn run_play_command(
    strategy: StrategyType,
    vocabulary: CandidateSet,
    config: SolverConfig,
    verbose: bool,
) -> Result<()> {
    println!("Type the feedback for each guess: G = green, Y = yellow, - = gray (or 'win').");

    let mut oracle = PromptOracle::new(io::stdin().lock(), io::stdout());
    play(
        strategy,
        vocabulary,
        config,
        &mut oracle,
        ConsoleObserver::new(verbose),
    )
    .context("game aborted")?;
    Ok(())
}

fn run_remote_command(
    remote: RemoteConfig,
    strategy: StrategyType,
    vocabulary: CandidateSet,
    config: SolverConfig,
) -> Result<()> {
    let endpoint = remote.base_url.clone();
    let mut oracle = RemoteOracle::new(remote).context("failed to build HTTP client")?;
    info!("playing against {}", oracle.endpoint());

    let report = play(strategy, vocabulary, config, &mut oracle, NoopObserver)
        .with_context(|| format!("game against {endpoint} aborted"))?;

    print_report(&report);
    Ok(())
}

fn run_analyze_command(word: Option<&str>, top: usize, vocabulary: &CandidateSet) -> Result<()> {
    match word {
        Some(word) => {
            let result = analyze_word(word, vocabulary, top)?;
            print_analysis_result(&result);
        }
        None => print_openings(&best_openings(vocabulary, top), vocabulary.len()),
    }
    Ok(())
}

fn run_benchmark_command(
    count: Option<usize>,
    seed: u64,
    strategy: StrategyType,
    vocabulary: &CandidateSet,
    config: &SolverConfig,
) -> Result<()> {
    let targets = select_targets(vocabulary, count, seed);
    let progress = benchmark_progress(targets.len())?;

    let result = run_benchmark(&strategy, vocabulary, &targets, config, &progress)?;
    print_benchmark_result(&result);
    Ok(())
}
