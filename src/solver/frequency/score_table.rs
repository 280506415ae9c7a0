//! Letter weights for the frequency scorer
//!
//! Static tables come from published English frequencies or from letter counts
//! over the answer list. The dynamic table is rebuilt from the candidates on
//! every guess.

use crate::config::LetterScoreAlgorithm;
use crate::core::Word;
use crate::core::letter::{self, ALPHABET_SIZE};

/// English letters, most frequent first
const FULL_LANGUAGE_ORDER: &[u8; ALPHABET_SIZE] = b"eariotnslcudpmhgbfywkvxzjq";

/// English letter frequencies in percent, in `FULL_LANGUAGE_ORDER`
const FULL_LANGUAGE_PERCENT: [f64; ALPHABET_SIZE] = [
    11.1607, 8.4966, 7.5809, 7.5448, 7.1635, 6.9509, 6.6544, 5.7351, 5.4893, 4.5388, 3.6308,
    3.3844, 3.1671, 3.0129, 3.0034, 2.4705, 2.0720, 1.8121, 1.7779, 1.2899, 1.1016, 1.0074,
    0.2902, 0.2722, 0.1965, 0.1962,
];

const FULL_LANGUAGE_SCALE: f64 = 50.0;

/// Answer-list letters, most frequent first
const WORDLE_LIST_ORDER: &[u8; ALPHABET_SIZE] = b"earotilsnucyhdpgmbfkwvxzqj";

/// Answer-list letter counts, in `WORDLE_LIST_ORDER`
const WORDLE_LIST_COUNTS: [f64; ALPHABET_SIZE] = [
    456.0, 392.0, 362.0, 291.0, 288.0, 279.0, 279.0, 267.0, 238.0, 197.0, 194.0, 180.0, 164.0,
    160.0, 149.0, 130.0, 129.0, 115.0, 89.0, 87.0, 84.0, 64.0, 16.0, 15.0, 13.0, 12.0,
];

/// Answer-list counts scaled down to small integers
const WORDLE_LIST_SCALED: [(u8, f64); ALPHABET_SIZE] = [
    (b'e', 23.0),
    (b'a', 20.0),
    (b'r', 18.0),
    (b'i', 14.0),
    (b'o', 14.0),
    (b'l', 14.0),
    (b't', 14.0),
    (b's', 13.0),
    (b'n', 12.0),
    (b'c', 10.0),
    (b'u', 10.0),
    (b'y', 9.0),
    (b'd', 8.0),
    (b'h', 8.0),
    (b'p', 7.0),
    (b'b', 6.0),
    (b'g', 6.0),
    (b'm', 6.0),
    (b'f', 4.0),
    (b'k', 4.0),
    (b'w', 4.0),
    (b'v', 3.0),
    (b'j', 1.0),
    (b'q', 1.0),
    (b'x', 1.0),
    (b'z', 1.0),
];

/// Weight per letter, indexed by alphabet position
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable([f64; ALPHABET_SIZE]);

impl ScoreTable {
    /// Build the table for `algorithm`
    ///
    /// `candidates` is only read by the dynamic table.
    #[must_use]
    pub fn build(algorithm: LetterScoreAlgorithm, candidates: &[Word]) -> Self {
        Self::fixed(algorithm).unwrap_or_else(|| Self::dynamic(candidates))
    }

    /// The static table for `algorithm`, or `None` for the dynamic one
    #[must_use]
    pub fn fixed(algorithm: LetterScoreAlgorithm) -> Option<Self> {
        use LetterScoreAlgorithm as A;

        let table = match algorithm {
            A::StaticProportionalFullLanguage => {
                Self::from_order(FULL_LANGUAGE_ORDER, |i| FULL_LANGUAGE_PERCENT[i])
            }
            A::StaticProportionalScaledFullLanguage => Self::from_order(FULL_LANGUAGE_ORDER, |i| {
                FULL_LANGUAGE_PERCENT[i] * FULL_LANGUAGE_SCALE
            }),
            A::StaticLinearFullLanguage => Self::linear(FULL_LANGUAGE_ORDER),
            A::StaticLinearWordleList => Self::linear(WORDLE_LIST_ORDER),
            A::StaticProportionalWordleList => {
                Self::from_order(WORDLE_LIST_ORDER, |i| WORDLE_LIST_COUNTS[i])
            }
            A::StaticProportionalScaledWordleList => Self::from_pairs(&WORDLE_LIST_SCALED),
            A::DynamicProportionalWordleList => return None,
        };
        Some(table)
    }

    /// Share of `candidates` containing each letter
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::Word;
    /// use wordle_solver::solver::frequency::ScoreTable;
    ///
    /// let candidates = vec![Word::new("eerie").unwrap(), Word::new("tulip").unwrap()];
    /// let table = ScoreTable::dynamic(&candidates);
    /// assert_eq!(table.weight(b'e'), 0.5); // counted once per word
    /// assert_eq!(table.weight(b'i'), 1.0);
    /// assert_eq!(table.weight(b'z'), 0.0);
    /// ```
    #[must_use]
    pub fn dynamic(candidates: &[Word]) -> Self {
        let mut counts = [0usize; ALPHABET_SIZE];
        for word in candidates {
            for letter in word.letters().iter() {
                counts[letter::index(letter)] += 1;
            }
        }

        let total = candidates.len().max(1) as f64;
        Self(counts.map(|count| count as f64 / total))
    }

    /// Weight of one letter
    #[inline]
    #[must_use]
    pub const fn weight(&self, letter: u8) -> f64 {
        self.0[letter::index(letter)]
    }

    #[must_use]
    pub const fn weights(&self) -> &[f64; ALPHABET_SIZE] {
        &self.0
    }

    fn from_order(order: &[u8; ALPHABET_SIZE], weight: impl Fn(usize) -> f64) -> Self {
        let mut table = [0.0; ALPHABET_SIZE];
        for (rank, &letter) in order.iter().enumerate() {
            table[letter::index(letter)] = weight(rank);
        }
        Self(table)
    }

    fn linear(order: &[u8; ALPHABET_SIZE]) -> Self {
        Self::from_order(order, |rank| (ALPHABET_SIZE - rank) as f64)
    }

    fn from_pairs(pairs: &[(u8, f64); ALPHABET_SIZE]) -> Self {
        let mut table = [0.0; ALPHABET_SIZE];
        for &(letter, weight) in pairs {
            table[letter::index(letter)] = weight;
        }
        Self(table)
    }
}
