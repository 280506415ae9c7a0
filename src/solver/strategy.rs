//! Guess selection strategies
//!
//! Defines the Strategy trait and the scorers it dispatches to.

use super::entropy;
use super::frequency::FrequencyStrategy;
use crate::board::Constraints;
use crate::config::{EntropyScope, LetterScoreAlgorithm, SolverAlgorithm, SolverConfig};
use crate::core::Word;

/// A strategy for selecting the best guess from a pool of words
pub trait Strategy {
    /// Select the best guess from the guess pool given the current candidates
    ///
    /// `constraints` is what the board has learned so far; scorers that
    /// only look at the candidates ignore it.
    ///
    /// Returns the best guess, or `None` if the guess pool is empty.
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[Word],
        constraints: &Constraints,
    ) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Chosen once from the configuration; dispatch stays static.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Letter-frequency scoring (default)
    Frequency(FrequencyStrategy),
    /// Per-position letter entropy
    LetterEntropy(LetterEntropyStrategy),
    /// Outcome-pattern entropy
    PatternEntropy(PatternEntropyStrategy),
    /// Pattern entropy penalised by expected remaining candidates
    Lookahead(LookaheadStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[Word],
        constraints: &Constraints,
    ) -> Option<&'a Word> {
        match self {
            Self::Frequency(s) => s.select_guess(guess_pool, candidates, constraints),
            Self::LetterEntropy(s) => s.select_guess(guess_pool, candidates, constraints),
            Self::PatternEntropy(s) => s.select_guess(guess_pool, candidates, constraints),
            Self::Lookahead(s) => s.select_guess(guess_pool, candidates, constraints),
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Frequency(FrequencyStrategy::default())
    }
}

impl StrategyType {
    /// Build the strategy a configuration asks for
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::config::{EntropyScope, SolverAlgorithm, SolverConfig};
    /// use wordle_solver::solver::StrategyType;
    ///
    /// let config = SolverConfig::new()
    ///     .with_solver_algorithm(SolverAlgorithm::InformationTheory)
    ///     .with_entropy_scope(EntropyScope::Letter);
    ///
    /// assert_eq!(StrategyType::from_config(&config).name(), "letter entropy");
    /// ```
    #[must_use]
    pub fn from_config(config: &SolverConfig) -> Self {
        match config.solver_algorithm {
            SolverAlgorithm::FrequencyAnalysis => {
                Self::frequency(config.letter_score_algorithm)
            }
            SolverAlgorithm::InformationTheory => Self::entropy(config.entropy_scope),
        }
    }

    #[must_use]
    pub fn frequency(algorithm: LetterScoreAlgorithm) -> Self {
        Self::Frequency(FrequencyStrategy::new(algorithm))
    }

    #[must_use]
    pub const fn entropy(scope: EntropyScope) -> Self {
        match scope {
            EntropyScope::Letter => Self::LetterEntropy(LetterEntropyStrategy),
            EntropyScope::Pattern => Self::PatternEntropy(PatternEntropyStrategy),
            EntropyScope::PatternWithLookahead => Self::Lookahead(LookaheadStrategy),
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency analysis",
            Self::LetterEntropy(_) => "letter entropy",
            Self::PatternEntropy(_) => "pattern entropy",
            Self::Lookahead(_) => "pattern entropy with lookahead",
        }
    }
}

/// Per-position letter entropy strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterEntropyStrategy;

impl Strategy for LetterEntropyStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[Word],
        _constraints: &Constraints,
    ) -> Option<&'a Word> {
        entropy::select_best_letter_guess(guess_pool, candidates).map(|(best, _)| best)
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the guess with the highest Shannon entropy over outcome
/// patterns.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternEntropyStrategy;

impl Strategy for PatternEntropyStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[Word],
        _constraints: &Constraints,
    ) -> Option<&'a Word> {
        entropy::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }
}

/// One-step lookahead strategy
///
/// Pattern entropy minus the bits still needed for the expected remainder.
#[derive(Debug, Clone, Copy, Default)]
pub struct LookaheadStrategy;

impl Strategy for LookaheadStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[Word],
        _constraints: &Constraints,
    ) -> Option<&'a Word> {
        entropy::select_best_lookahead_guess(guess_pool, candidates).map(|(best, _)| best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NamedOption;
    use crate::wordlists::loader::words_from_slice;

    fn setup_test_data() -> (Vec<Word>, Vec<Word>) {
        let guesses = words_from_slice(&["crane", "slate"]);
        let candidates = words_from_slice(&["irate", "crate", "grate"]);
        (guesses, candidates)
    }

    #[test]
    fn every_strategy_returns_a_pool_word() {
        let (guesses, candidates) = setup_test_data();
        let strategies = [
            StrategyType::default(),
            StrategyType::entropy(EntropyScope::Letter),
            StrategyType::entropy(EntropyScope::Pattern),
            StrategyType::entropy(EntropyScope::PatternWithLookahead),
        ];

        for strategy in strategies {
            let guess = strategy
                .select_guess(&guesses, &candidates, &Constraints::new())
                .unwrap();
            assert!(guesses.contains(guess), "{} left the pool", strategy.name());
        }
    }

    #[test]
    fn from_config_follows_algorithm() {
        let config = SolverConfig::new();
        assert!(matches!(
            StrategyType::from_config(&config),
            StrategyType::Frequency(_)
        ));

        let config = config.with_solver_algorithm(SolverAlgorithm::InformationTheory);
        assert!(matches!(
            StrategyType::from_config(&config),
            StrategyType::PatternEntropy(_)
        ));

        let config = config.with_entropy_scope(EntropyScope::PatternWithLookahead);
        assert!(matches!(
            StrategyType::from_config(&config),
            StrategyType::Lookahead(_)
        ));
    }

    #[test]
    fn frequency_variant_keeps_letter_table() {
        for &algorithm in LetterScoreAlgorithm::ALL {
            let config = SolverConfig::new().with_letter_score_algorithm(algorithm);
            let StrategyType::Frequency(strategy) = StrategyType::from_config(&config) else {
                panic!("frequency analysis should build a frequency strategy");
            };
            assert_eq!(strategy.algorithm(), algorithm);
        }
    }

    #[test]
    fn pattern_entropy_prefers_splitting_guess() {
        let guesses = words_from_slice(&["zzzzz", "cigar"]);
        let candidates = words_from_slice(&["slate", "irate", "crate", "grate"]);
        let strategy = StrategyType::entropy(EntropyScope::Pattern);

        let guess = strategy
            .select_guess(&guesses, &candidates, &Constraints::new())
            .unwrap();
        assert_eq!(guess.text(), "cigar");
    }

    #[test]
    fn empty_pool_yields_none() {
        let candidates = words_from_slice(&["irate"]);
        for scope in EntropyScope::ALL {
            let strategy = StrategyType::entropy(*scope);
            assert!(strategy.select_guess(&[], &candidates, &Constraints::new()).is_none());
        }
    }
}
