//! Entropy-based Wordle solver
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions,
//! plus a cheaper per-position letter entropy and a one-step lookahead score.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, PositionalFrequencies, calculate_entropy, calculate_metrics, expected_remaining,
    group_by_pattern, lookahead_score, shannon_entropy,
};
pub use selector::{select_best_guess, select_best_letter_guess, select_best_lookahead_guess};
