//! Wordle Solver - CLI
//!
//! Suggests guesses for the daily puzzle, solves known targets, and
//! benchmarks the scoring algorithms over the dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;
use wordle_solver::{
    board::Constraints,
    commands::{analyze_word, run_benchmark, run_play, sample_targets, solve_word},
    config::{EntropyScope, GuessPool, LetterScoreAlgorithm, SolverAlgorithm, SolverConfig},
    core::Word,
    error::FeedbackError,
    logging,
    output::{
        display::{print_outcome, print_share_card},
        print_analysis_result, print_benchmark_result, print_solve_result, puzzle_number,
    },
    solver::Solver,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_solver",
    about = "Wordle solver using letter-frequency and information-theoretic scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Scorer family (overrides the configuration file)
    #[arg(short, long, global = true, value_enum)]
    algorithm: Option<SolverAlgorithm>,

    /// Letter weights for frequency analysis
    #[arg(short, long, global = true, value_enum)]
    letter_scores: Option<LetterScoreAlgorithm>,

    /// Histogram for information theory
    #[arg(short, long, global = true, value_enum)]
    entropy_scope: Option<EntropyScope>,

    /// Words guesses may be drawn from
    #[arg(short, long, global = true, value_enum)]
    guess_pool: Option<GuessPool>,

    /// Guesses allowed per game
    #[arg(short, long, global = true)]
    max_tries: Option<usize>,

    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play along with the real puzzle (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and entropy per guess
        #[arg(short, long)]
        details: bool,

        /// Print the share card
        #[arg(short, long)]
        share: bool,
    },

    /// Score a word against the whole dictionary
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for picking the words
        #[arg(long)]
        seed: Option<u64>,

        /// Test every dictionary word instead of a sample
        #[arg(long)]
        all: bool,
    },
}

impl Cli {
    /// Configuration file (or defaults) with command-line overrides applied
    fn solver_config(&self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::load(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
            None => SolverConfig::new(),
        };

        if let Some(algorithm) = self.algorithm {
            config = config.with_solver_algorithm(algorithm);
        }
        if let Some(algorithm) = self.letter_scores {
            config = config.with_letter_score_algorithm(algorithm);
        }
        if let Some(scope) = self.entropy_scope {
            config = config.with_entropy_scope(scope);
        }
        if let Some(pool) = self.guess_pool {
            config = config.with_guess_pool(pool);
        }
        if let Some(max_tries) = self.max_tries {
            config = config.with_max_tries(max_tries);
        }

        config.validate()?;
        Ok(config)
    }

    fn dictionary(&self) -> Result<Vec<Word>> {
        match &self.wordlist {
            Some(path) => load_from_file(path)
                .with_context(|| format!("reading word list {}", path.display())),
            None => Ok(words_from_slice(WORDS)),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.solver_config()?;
    let dictionary = cli.dictionary()?;
    info!(
        "{} words, {:?} / {:?}",
        dictionary.len(),
        config.solver_algorithm,
        config.guess_pool
    );

    let mut solver = Solver::new(&config, dictionary)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&mut solver),
        Commands::Solve {
            word,
            details,
            share,
        } => run_solve_command(&mut solver, &word, details, share),
        Commands::Analyze { word } => run_analyze_command(&solver, &config, &word),
        Commands::Benchmark { count, seed, all } => {
            run_benchmark_command(&mut solver, count, seed, all)
        }
    }
}

fn run_play_command(solver: &mut Solver) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Solver - Play Along                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Enter each suggested word in the game, then tell me the colours.\n");

    match run_play(solver, io::stdin().lock(), io::stdout().lock()) {
        Ok(record) => {
            print_outcome(&record);
            print_share_card(&record, puzzle_number(SystemTime::now()), solver.max_tries());
            Ok(())
        }
        Err(FeedbackError::Aborted) => {
            println!("\n👋 Thanks for playing!\n");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn run_solve_command(solver: &mut Solver, word: &str, details: bool, share: bool) -> Result<()> {
    let result = solve_word(solver, word)?;
    print_solve_result(&result, details);

    if share {
        print_share_card(
            &result.record,
            puzzle_number(SystemTime::now()),
            solver.max_tries(),
        );
    }
    Ok(())
}

fn run_analyze_command(solver: &Solver, config: &SolverConfig, word: &str) -> Result<()> {
    let dictionary = solver.board().dictionary();
    let result = analyze_word(
        word,
        dictionary,
        dictionary,
        &Constraints::new(),
        config.letter_score_algorithm,
    )?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    solver: &mut Solver,
    count: usize,
    seed: Option<u64>,
    all: bool,
) -> Result<()> {
    let targets = if all {
        solver.board().dictionary().to_vec()
    } else {
        sample_targets(solver.board().dictionary(), count, seed)
    };

    println!(
        "Running benchmark on {} words with {}...",
        targets.len(),
        solver.board().strategy().name()
    );

    let result = run_benchmark(solver, &targets, true)?;
    print_benchmark_result(&result, solver.max_tries());
    Ok(())
}
