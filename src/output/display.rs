//! Display functions for command results

use super::formatters::{create_progress_bar, entropy_bar, guesses_noun};
use super::share::ShareCard;
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::results::{GameOutcome, GameRecord};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.text().to_uppercase(),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(metrics) = &step.metrics {
                println!("  Entropy:    {:.3} bits", metrics.entropy);
                println!("  Expected:   {:.1} candidates", metrics.expected_remaining);
                println!("  Worst case: {} candidates", metrics.max_partition);

                // Information actually gained (reduction in uncertainty)
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
    print_outcome(&result.record);
}

/// Print how a game ended
pub fn print_outcome(record: &GameRecord) {
    let tries = record.tries;
    let line = match record.outcome {
        GameOutcome::Won => format!("✅ Solved in {tries} {}!", guesses_noun(tries))
            .green()
            .bold(),
        GameOutcome::Exhausted => format!("❌ Failed to solve in {tries} {}", guesses_noun(tries))
            .red()
            .bold(),
        GameOutcome::Unsolvable => {
            format!("❌ No candidates remain after {tries} {}", guesses_noun(tries))
                .red()
                .bold()
        }
    };
    println!("{line}");
}

/// Print the share card for a finished game
pub fn print_share_card(record: &GameRecord, puzzle: u64, max_tries: usize) {
    println!(
        "\n{}",
        ShareCard::from_record(record).render(puzzle, max_tries)
    );
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.in_dictionary {
        println!("\n{}", "⚠ Not in the dictionary".yellow());
    }

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:        [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Letter entropy: {:.3} bits", result.letter_entropy);
    println!("   Lookahead:      {:.3}", result.lookahead_score);
    println!(
        "   Info gain:      {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:       {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:     {} candidates", result.max_partition);
    println!(
        "   Letter score:   {:.2} ({})",
        result.frequency_score, result.letter_score_algorithm
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, max_tries: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let Some(stats) = &result.stats else {
        println!("\nNo words tested.");
        return;
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", stats.words);
    println!(
        "   Solved:           {} {}",
        stats.wins,
        format!("({:.1}%)", stats.win_rate).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", stats.avg_tries).bright_yellow().bold()
    );
    println!("   Median guesses:   {}", stats.median_tries);
    println!("   Std deviation:    {:.3}", stats.sd_tries);
    println!(
        "   Time per word:    {:.2}ms (sd {:.2}ms)",
        stats.avg_time_ms, stats.sd_time_ms
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for guess_count in 1..=max_tries {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = count as f64 / stats.words as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!("\n😰 {}", "Not solved:".yellow().bold());
        for (word, outcome) in result.failures.iter().take(10) {
            let reason = match outcome {
                GameOutcome::Unsolvable => "no candidates",
                _ => "out of tries",
            };
            println!("   {} ({reason})", word.text().to_uppercase().yellow());
        }
        if result.failures.len() > 10 {
            println!("   … and {} more", result.failures.len() - 10);
        }
    }
}
