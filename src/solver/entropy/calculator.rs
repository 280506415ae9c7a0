//! Shannon entropy calculation for Wordle guesses
//!
//! Given a guess and set of candidates, computes the expected information gain,
//! either from full outcome patterns or from per-position letter frequencies.

use crate::core::letter::{self, ALPHABET_SIZE};
use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

impl GuessMetrics {
    /// Entropy minus the bits still needed to resolve the expected remainder
    #[must_use]
    pub fn lookahead_score(&self) -> f64 {
        if self.expected_remaining > 0.0 {
            self.entropy - self.expected_remaining.log2()
        } else {
            self.entropy
        }
    }
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_solver::core::Word;
/// use wordle_solver::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_pattern(guess, candidates))
}

/// Entropy penalised by the expected size of the next candidate set
///
/// `H − log₂(Σ count² / N)`: high when the guess splits the candidates finely
/// and leaves little to resolve afterwards.
#[must_use]
pub fn lookahead_score(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let counts = group_by_pattern(guess, candidates);
    shannon_entropy(&counts) - expected_remaining(&counts).log2()
}

/// Group candidates by the pattern they produce with the guess
#[must_use]
pub fn group_by_pattern(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use wordle_solver::solver::entropy::shannon_entropy;
/// use rustc_hash::FxHashMap;
/// use wordle_solver::core::Pattern;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Pattern::new(0), 25);
/// uniform.insert(Pattern::new(1), 25);
/// uniform.insert(Pattern::new(2), 25);
/// uniform.insert(Pattern::new(3), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &HashMap<Pattern, usize, S>) -> f64
where
    S: BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>();
    entropy_of_counts(pattern_counts.values().copied(), total)
}

/// Expected bucket size a candidate falls into: Σ count² / N
#[must_use]
pub fn expected_remaining<S>(pattern_counts: &HashMap<Pattern, usize, S>) -> f64
where
    S: BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>();
    if total == 0 {
        return 0.0;
    }

    let squares: usize = pattern_counts.values().map(|&count| count * count).sum();
    squares as f64 / total as f64
}

/// −Σ p·log₂ p over the nonzero counts, with p = count / total
fn entropy_of_counts(counts: impl Iterator<Item = usize>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    counts.filter(|&count| count > 0).fold(0.0, |acc, count| {
        let p = count as f64 / total;
        acc - p * p.log2()
    })
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    let counts = group_by_pattern(guess, candidates);

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining: expected_remaining(&counts),
        max_partition: counts.values().copied().max().unwrap_or(0),
    }
}

/// How often each letter sits at each position across a candidate set
///
/// Built once per ranking, then every guess is scored in constant time.
#[derive(Debug, Clone)]
pub struct PositionalFrequencies {
    counts: [[usize; ALPHABET_SIZE]; 5],
    total: usize,
}

impl PositionalFrequencies {
    #[must_use]
    pub fn new(candidates: &[Word]) -> Self {
        let mut counts = [[0; ALPHABET_SIZE]; 5];
        for word in candidates {
            for (position, &ch) in word.chars().iter().enumerate() {
                counts[position][letter::index(ch)] += 1;
            }
        }

        Self {
            counts,
            total: candidates.len(),
        }
    }

    /// Candidates with `letter` at `position`
    #[must_use]
    pub const fn count(&self, position: usize, letter: u8) -> usize {
        self.counts[position][letter::index(letter)]
    }

    /// Letter-position entropy of a guess
    ///
    /// Sums −p·log₂ p over the guess's five positions, where p is the share of
    /// candidates with the guessed letter at that position. Positions are
    /// treated independently.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::Word;
    /// use wordle_solver::solver::entropy::PositionalFrequencies;
    ///
    /// let candidates = vec![Word::new("slate").unwrap(), Word::new("crate").unwrap()];
    /// let frequencies = PositionalFrequencies::new(&candidates);
    ///
    /// // s and l split the candidates in half (1 bit each); a, t, e are certain
    /// let entropy = frequencies.letter_entropy(&Word::new("slate").unwrap());
    /// assert!((entropy - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn letter_entropy(&self, guess: &Word) -> f64 {
        entropy_of_counts(
            guess
                .chars()
                .iter()
                .enumerate()
                .map(|(position, &ch)| self.count(position, ch)),
            self.total,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{WORDS, loader::words_from_slice};
    use proptest::prelude::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        words_from_slice(texts)
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 patterns, each appears once = log2(4) = 2 bits
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::new(0), 1);
        counts.insert(Pattern::new(1), 1);
        counts.insert(Pattern::new(2), 1);
        counts.insert(Pattern::new(3), 1);

        let entropy = shannon_entropy(&counts);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome_is_positive_zero() {
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::new(0), 10);

        let entropy = shannon_entropy(&counts);
        assert_eq!(entropy.total_cmp(&0.0), std::cmp::Ordering::Equal);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let mut uniform = FxHashMap::default();
        uniform.insert(Pattern::new(0), 25);
        uniform.insert(Pattern::new(1), 25);
        uniform.insert(Pattern::new(2), 25);
        uniform.insert(Pattern::new(3), 25);

        let mut skewed = FxHashMap::default();
        skewed.insert(Pattern::new(0), 97);
        skewed.insert(Pattern::new(1), 1);
        skewed.insert(Pattern::new(2), 1);
        skewed.insert(Pattern::new(3), 1);

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Pattern, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
        assert!(expected_remaining(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn calculate_entropy_all_same_pattern() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        assert!(calculate_entropy(&guess, &candidates).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_perfect_split() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz"]);
        assert!((calculate_entropy(&guess, &candidates) - 1.0).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        assert!(calculate_entropy(&guess, &[]).abs() < f64::EPSILON);
        assert!(lookahead_score(&guess, &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn expected_remaining_is_sum_of_squares_over_n() {
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::new(0), 3);
        counts.insert(Pattern::new(1), 1);
        // (9 + 1) / 4
        assert!((expected_remaining(&counts) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn lookahead_prefers_fine_splits() {
        let candidates = words(&["slate", "crate", "grate", "irate"]);
        // cigar gives each of these a different pattern
        let fine = lookahead_score(&Word::new("cigar").unwrap(), &candidates);
        let coarse = lookahead_score(&Word::new("zzzzz").unwrap(), &candidates);
        assert!(fine > coarse);
        // Single bucket of 4: 0 − log2(4)
        assert!((coarse + 2.0).abs() < 1e-12);
    }

    #[test]
    fn metrics_agree_with_helpers() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "irate", "trace", "raise", "crane"]);
        let metrics = calculate_metrics(&guess, &candidates);

        assert!((metrics.entropy - calculate_entropy(&guess, &candidates)).abs() < 1e-12);
        assert!((metrics.lookahead_score() - lookahead_score(&guess, &candidates)).abs() < 1e-12);
        assert!(metrics.max_partition >= 1);
        assert!(metrics.expected_remaining >= 1.0);
    }

    #[test]
    fn group_by_pattern_works() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "crate"]);

        let groups = group_by_pattern(&guess, &candidates);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.values().sum::<usize>(), 2);
    }

    #[test]
    fn letter_entropy_counts_positions_independently() {
        let candidates = words(&["aback", "abase", "abate", "abbey"]);
        let frequencies = PositionalFrequencies::new(&candidates);
        assert_eq!(frequencies.count(0, b'a'), 4);
        assert_eq!(frequencies.count(2, b'a'), 3);

        // a, b certain; a at 2: p = 3/4; c at 3: p = 1/4; k at 4: p = 1/4
        let expected = -(0.75f64 * 0.75f64.log2()) - 2.0 * (0.25f64 * 0.25f64.log2());
        let entropy = frequencies.letter_entropy(&Word::new("aback").unwrap());
        assert!((entropy - expected).abs() < 1e-12);

        // Letters nobody has there contribute nothing
        assert!(frequencies.letter_entropy(&Word::new("zzzzz").unwrap()).abs() < f64::EPSILON);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn entropy_nonnegative_and_zero_iff_single_outcome(
            guess in 0..WORDS.len(),
            picks in prop::collection::vec(0..WORDS.len(), 1..40),
        ) {
            let dictionary = words_from_slice(WORDS);
            let guess = &dictionary[guess];
            let candidates: Vec<Word> = picks.iter().map(|&i| dictionary[i].clone()).collect();

            let entropy = calculate_entropy(guess, &candidates);
            let buckets = group_by_pattern(guess, &candidates).len();

            prop_assert!(entropy >= 0.0);
            prop_assert_eq!(entropy == 0.0, buckets == 1);
            prop_assert!(entropy <= (buckets as f64).log2() + 1e-9);

            let frequencies = PositionalFrequencies::new(&candidates);
            prop_assert!(frequencies.letter_entropy(guess) >= 0.0);
        }
    }
}
