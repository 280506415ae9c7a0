//! Benchmark command
//!
//! Plays the solver against many target words and summarises how it did.

use crate::core::Word;
use crate::error::FeedbackError;
use crate::feedback::MockFeedback;
use crate::results::{GameOutcome, GameResults, Stats};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{SeedableRng, rng};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub results: GameResults,
    /// `None` when no word was played
    pub stats: Option<Stats>,
    /// Won games by number of tries
    pub distribution: BTreeMap<usize, usize>,
    /// Targets that were not solved, with how each game ended
    pub failures: Vec<(Word, GameOutcome)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct targets from `words`
///
/// The same seed always picks the same words; without one the choice is
/// random. Asking for more words than there are returns them all.
#[must_use]
pub fn sample_targets(words: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            words.choose_multiple(&mut rng, count).cloned().collect()
        }
        None => words.choose_multiple(&mut rng(), count).cloned().collect(),
    }
}

/// Run benchmark on a set of target words
///
/// Games are played one after the other; each guess is still ranked in
/// parallel. With `show_progress` a progress bar tracks the run on stderr.
///
/// # Errors
///
/// Propagates a feedback error, which the mock source only raises for an
/// invalid target.
pub fn run_benchmark(
    solver: &mut Solver,
    target_words: &[Word],
    show_progress: bool,
) -> Result<BenchmarkResult, FeedbackError> {
    let progress = if show_progress {
        progress_bar(target_words.len())
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut results = GameResults::new();
    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();

    for (idx, target) in target_words.iter().enumerate() {
        let mut source = MockFeedback::from_word(target.clone());
        let record = solver.play(&mut source, &mut results)?;

        if record.won() {
            *distribution.entry(record.tries).or_insert(0) += 1;
        } else {
            failures.push((target.clone(), record.outcome));
        }

        if idx % 10 == 0
            && let Some(stats) = results.stats()
        {
            progress.set_message(format!("Avg: {:.2}", stats.avg_tries));
        }
        progress.inc(1);
    }

    progress.finish_with_message("Complete!");

    let duration = start.elapsed();
    let words_per_second = if duration.is_zero() {
        0.0
    } else {
        target_words.len() as f64 / duration.as_secs_f64()
    };

    Ok(BenchmarkResult {
        stats: results.stats(),
        results,
        distribution,
        failures,
        duration,
        words_per_second,
    })
}

fn progress_bar(len: usize) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("█▓▒░");

    ProgressBar::new(len as u64).with_style(style)
}
