//! Frequency-weighted word scoring

use super::ScoreTable;
use crate::board::Constraints;
use crate::config::LetterScoreAlgorithm;
use crate::core::Word;
use crate::core::letter::LetterSet;
use crate::solver::selection::select_best_by;
use crate::solver::strategy::Strategy;

/// Score a word by the letters it would reveal
///
/// Each distinct letter counts once; letters in `known` are skipped since
/// guessing them again teaches nothing. A word made only of known letters
/// scores 0.
///
/// # Examples
/// ```
/// use wordle_solver::config::LetterScoreAlgorithm;
/// use wordle_solver::core::Word;
/// use wordle_solver::core::letter::LetterSet;
/// use wordle_solver::solver::frequency::{ScoreTable, score_word};
///
/// let table = ScoreTable::fixed(LetterScoreAlgorithm::StaticLinearWordleList).unwrap();
/// let word = Word::new("eerie").unwrap();
///
/// // e (26) + r (24) + i (21), with the repeated e counted once
/// assert_eq!(score_word(&word, &table, LetterSet::EMPTY), 71.0);
///
/// let known: LetterSet = b"eri".iter().copied().collect();
/// assert_eq!(score_word(&word, &table, known), 0.0);
/// ```
#[must_use]
pub fn score_word(word: &Word, table: &ScoreTable, known: LetterSet) -> f64 {
    word.letters()
        .difference(known)
        .iter()
        .map(|letter| table.weight(letter))
        .sum()
}

/// Frequency analysis strategy
///
/// Picks the word whose unknown letters carry the most weight.
#[derive(Debug, Clone)]
pub struct FrequencyStrategy {
    algorithm: LetterScoreAlgorithm,
    fixed: Option<ScoreTable>,
}

impl FrequencyStrategy {
    /// Create a strategy for the given letter weights
    ///
    /// Static tables are built here, once; the dynamic table is built per guess.
    #[must_use]
    pub fn new(algorithm: LetterScoreAlgorithm) -> Self {
        Self {
            algorithm,
            fixed: ScoreTable::fixed(algorithm),
        }
    }

    #[must_use]
    pub const fn algorithm(&self) -> LetterScoreAlgorithm {
        self.algorithm
    }
}

impl Default for FrequencyStrategy {
    fn default() -> Self {
        Self::new(LetterScoreAlgorithm::default())
    }
}

impl Strategy for FrequencyStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[Word],
        constraints: &Constraints,
    ) -> Option<&'a Word> {
        let dynamic;
        let table = match &self.fixed {
            Some(table) => table,
            None => {
                dynamic = ScoreTable::dynamic(candidates);
                &dynamic
            }
        };
        let known = constraints.known_letters();

        select_best_by(guess_pool, |word| score_word(word, table, known)).map(|(best, _)| best)
    }
}
