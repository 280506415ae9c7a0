//! Best-guess selection shared by all scorers
//!
//! Scores are computed in parallel, but the winner does not depend on
//! scheduling: the highest score wins and equal scores go to the word that
//! comes first in the pool.

use crate::core::Word;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Select the highest-scoring word of `guess_pool`
///
/// Returns the word and its score, or `None` if the pool is empty.
///
/// # Examples
/// ```
/// use wordle_solver::core::Word;
/// use wordle_solver::solver::selection::select_best_by;
///
/// let pool = vec![
///     Word::new("crane").unwrap(),
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// // Every word scores the same: the first one wins
/// let (best, score) = select_best_by(&pool, |_| 1.0).unwrap();
/// assert_eq!(best.text(), "crane");
/// assert_eq!(score, 1.0);
/// ```
pub fn select_best_by<'a, F>(guess_pool: &'a [Word], score: F) -> Option<(&'a Word, f64)>
where
    F: Fn(&Word) -> f64 + Sync,
{
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (index, guess, score(guess)))
        .max_by(|a, b| compare_scored(a, b))
        .map(|(_, guess, score)| (guess, score))
}

/// Higher score first; on equal scores the lower index is the greater element
fn compare_scored(a: &(usize, &Word, f64), b: &(usize, &Word, f64)) -> Ordering {
    a.2.total_cmp(&b.2).then_with(|| b.0.cmp(&a.0))
}
