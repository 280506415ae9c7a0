//! Entropy-based word selection
//!
//! Selects words that maximize expected information gain, measured three ways.

use super::calculator::{PositionalFrequencies, calculate_entropy, lookahead_score};
use crate::core::Word;
use crate::solver::selection::select_best_by;

/// Select best guess by maximizing pattern entropy
///
/// Returns the word with highest entropy and its entropy value,
/// or `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_solver::core::Word;
/// use wordle_solver::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let (best, entropy) = select_best_guess(&guesses, &candidates).unwrap();
/// assert_eq!(best.text(), "aeros"); // AEROS has higher entropy than AAAAA
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(guess_pool: &'a [Word], candidates: &[Word]) -> Option<(&'a Word, f64)> {
    select_best_by(guess_pool, |guess| calculate_entropy(guess, candidates))
}

/// Select best guess by letter-position entropy
///
/// Cheaper than pattern entropy: frequencies are counted once and each guess
/// is scored from them.
#[must_use]
pub fn select_best_letter_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &[Word],
) -> Option<(&'a Word, f64)> {
    let frequencies = PositionalFrequencies::new(candidates);
    select_best_by(guess_pool, |guess| frequencies.letter_entropy(guess))
}

/// Select best guess by pattern entropy minus the expected follow-up cost
#[must_use]
pub fn select_best_lookahead_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &[Word],
) -> Option<(&'a Word, f64)> {
    select_best_by(guess_pool, |guess| lookahead_score(guess, candidates))
}
