//! Solver configuration
//!
//! Load solver configuration from TOML files to pick the scoring algorithm,
//! the entropy scope, the guess pool and the opening guesses without code
//! changes. Every field has a default, so an empty file is a valid
//! configuration.
//!
//! # Examples
//!
//! ```
//! use wordle_solver::config::{EntropyScope, SolverAlgorithm, SolverConfig};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     solver_algorithm = "information_theory"
//!     entropy_scope = "pattern_with_lookahead"
//!
//!     [openers]
//!     pattern_with_lookahead = "crane"
//! "#).unwrap();
//!
//! assert_eq!(config.solver_algorithm, SolverAlgorithm::InformationTheory);
//! assert_eq!(config.entropy_scope, EntropyScope::PatternWithLookahead);
//! assert_eq!(config.opener(), Some("crane"));
//! assert_eq!(config.max_tries, 6);
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::Word;
use crate::error::ConfigError;

/// Named configuration option
///
/// Gives every enumerated option one canonical `snake_case` name, shared by the
/// TOML file, `FromStr` and `Display`.
pub trait NamedOption: Sized + Copy + 'static {
    /// What kind of option this is, used in error messages
    const KIND: &'static str;
    /// Every variant
    const ALL: &'static [Self];

    /// Canonical name of this variant
    fn name(self) -> &'static str;

    /// Look up a variant by name; `-` and `_` are interchangeable
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownOption` if no variant has that name
    fn from_name(name: &str) -> Result<Self, ConfigError> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.name() == normalized)
            .ok_or_else(|| ConfigError::UnknownOption {
                kind: Self::KIND,
                value: name.to_string(),
            })
    }
}

macro_rules! named_option {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl NamedOption for $ty {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

/// Which family of scorer ranks the candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SolverAlgorithm {
    /// Sum of letter weights over the unknown letters of a word
    #[default]
    FrequencyAnalysis,
    /// Expected information gain
    InformationTheory,
}

named_option!(SolverAlgorithm, "solver algorithm", {
    FrequencyAnalysis => "frequency_analysis",
    InformationTheory => "information_theory",
});

/// Letter weights used by the frequency scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LetterScoreAlgorithm {
    /// English letter frequencies in percent
    StaticProportionalFullLanguage,
    /// English letter frequencies × 50
    StaticProportionalScaledFullLanguage,
    /// Rank weights (26..1) over English letter frequencies
    StaticLinearFullLanguage,
    /// Rank weights (26..1) over answer-list letter frequencies
    StaticLinearWordleList,
    /// Raw letter counts over the answer list
    StaticProportionalWordleList,
    /// Answer-list letter counts scaled down to small integers
    #[default]
    StaticProportionalScaledWordleList,
    /// Share of the current candidates containing each letter
    DynamicProportionalWordleList,
}

named_option!(LetterScoreAlgorithm, "letter score algorithm", {
    StaticProportionalFullLanguage => "static_proportional_full_language",
    StaticProportionalScaledFullLanguage => "static_proportional_scaled_full_language",
    StaticLinearFullLanguage => "static_linear_full_language",
    StaticLinearWordleList => "static_linear_wordle_list",
    StaticProportionalWordleList => "static_proportional_wordle_list",
    StaticProportionalScaledWordleList => "static_proportional_scaled_wordle_list",
    DynamicProportionalWordleList => "dynamic_proportional_wordle_list",
});

impl LetterScoreAlgorithm {
    /// Whether the table must be rebuilt from the candidates on every guess
    #[must_use]
    pub const fn is_dynamic(self) -> bool {
        matches!(self, Self::DynamicProportionalWordleList)
    }
}

/// Outcome histogram the information-theory scorer measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EntropyScope {
    /// Per-position letter frequencies
    Letter,
    /// Full outcome patterns
    #[default]
    Pattern,
    /// Full outcome patterns, penalised by expected remaining candidates
    PatternWithLookahead,
}

named_option!(EntropyScope, "entropy scope", {
    Letter => "letter",
    Pattern => "pattern",
    PatternWithLookahead => "pattern_with_lookahead",
});

/// Words the solver may choose its guess from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GuessPool {
    /// Only words still consistent with the feedback
    #[default]
    Candidates,
    /// Any dictionary word, scored against the candidates
    Dictionary,
}

named_option!(GuessPool, "guess pool", {
    Candidates => "candidates",
    Dictionary => "dictionary",
});

/// Opening guess per scoring mode
///
/// An empty string disables the shortcut for that mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct Openers {
    pub frequency: String,
    pub letter: String,
    pub pattern: String,
    pub pattern_with_lookahead: String,
}

impl Default for Openers {
    fn default() -> Self {
        Self {
            frequency: "irate".to_string(),
            letter: "slate".to_string(),
            pattern: "raise".to_string(),
            pattern_with_lookahead: "slate".to_string(),
        }
    }
}

impl Openers {
    fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("frequency", self.frequency.as_str()),
            ("letter", self.letter.as_str()),
            ("pattern", self.pattern.as_str()),
            ("pattern_with_lookahead", self.pattern_with_lookahead.as_str()),
        ]
        .into_iter()
    }
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct SolverConfig {
    /// Scorer family
    pub solver_algorithm: SolverAlgorithm,

    /// Letter weights for `frequency_analysis`
    pub letter_score_algorithm: LetterScoreAlgorithm,

    /// Histogram for `information_theory`
    pub entropy_scope: EntropyScope,

    /// Where guesses are drawn from
    pub guess_pool: GuessPool,

    /// Guesses allowed per game
    pub max_tries: usize,

    /// Opening guesses
    pub openers: Openers,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            solver_algorithm: SolverAlgorithm::default(),
            letter_score_algorithm: LetterScoreAlgorithm::default(),
            entropy_scope: EntropyScope::default(),
            guess_pool: GuessPool::default(),
            max_tries: 6,
            openers: Openers::default(),
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, names an
    /// unknown option, or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// See [`SolverConfig::load`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error on invalid TOML, unknown options, or failed validation.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the scorer family.
    #[must_use]
    pub fn with_solver_algorithm(mut self, algorithm: SolverAlgorithm) -> Self {
        self.solver_algorithm = algorithm;
        self
    }

    /// Sets the letter weights for the frequency scorer.
    #[must_use]
    pub fn with_letter_score_algorithm(mut self, algorithm: LetterScoreAlgorithm) -> Self {
        self.letter_score_algorithm = algorithm;
        self
    }

    /// Sets the entropy scope for the information-theory scorer.
    #[must_use]
    pub fn with_entropy_scope(mut self, scope: EntropyScope) -> Self {
        self.entropy_scope = scope;
        self
    }

    /// Sets where guesses are drawn from.
    #[must_use]
    pub fn with_guess_pool(mut self, pool: GuessPool) -> Self {
        self.guess_pool = pool;
        self
    }

    /// Sets the number of guesses per game.
    #[must_use]
    pub fn with_max_tries(mut self, max_tries: usize) -> Self {
        self.max_tries = max_tries;
        self
    }

    /// Replaces the opening guesses.
    #[must_use]
    pub fn with_openers(mut self, openers: Openers) -> Self {
        self.openers = openers;
        self
    }

    /// Opening guess for the configured scorer, if any.
    #[must_use]
    pub fn opener(&self) -> Option<&str> {
        let opener = match (self.solver_algorithm, self.entropy_scope) {
            (SolverAlgorithm::FrequencyAnalysis, _) => &self.openers.frequency,
            (SolverAlgorithm::InformationTheory, EntropyScope::Letter) => &self.openers.letter,
            (SolverAlgorithm::InformationTheory, EntropyScope::Pattern) => &self.openers.pattern,
            (SolverAlgorithm::InformationTheory, EntropyScope::PatternWithLookahead) => {
                &self.openers.pattern_with_lookahead
            }
        };
        Some(opener.as_str()).filter(|s| !s.is_empty())
    }

    /// Checks values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for a zero try budget or an opener that
    /// is not a five-letter word.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tries == 0 {
            return Err(ConfigError::Invalid(
                "max_tries must be at least 1".to_string(),
            ));
        }

        for (mode, opener) in self.openers.iter() {
            if !opener.is_empty() {
                Word::new(opener).map_err(|e| {
                    ConfigError::Invalid(format!("opener for {mode} ('{opener}'): {e}"))
                })?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_parsing() {
        let toml = r#"
            solver_algorithm = "frequency_analysis"
            letter_score_algorithm = "dynamic_proportional_wordle_list"
            entropy_scope = "letter"
            guess_pool = "dictionary"
            max_tries = 8

            [openers]
            frequency = "arose"
        "#;

        let config = SolverConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.solver_algorithm, SolverAlgorithm::FrequencyAnalysis);
        assert_eq!(
            config.letter_score_algorithm,
            LetterScoreAlgorithm::DynamicProportionalWordleList
        );
        assert_eq!(config.entropy_scope, EntropyScope::Letter);
        assert_eq!(config.guess_pool, GuessPool::Dictionary);
        assert_eq!(config.max_tries, 8);
        assert_eq!(config.openers.frequency, "arose");
        assert_eq!(config.openers.pattern, "raise");
        assert_eq!(config.opener(), Some("arose"));
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config = SolverConfig::from_toml_str("").unwrap();
        assert_eq!(config, SolverConfig::default());
        assert_eq!(config.opener(), Some("irate"));
    }

    #[test]
    fn unknown_algorithm_is_fatal() {
        let err = SolverConfig::from_toml_str(r#"solver_algorithm = "genetic""#).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));

        let err = SolverConfig::from_toml_str(r#"entropy_scope = "bigram""#).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn unknown_field_is_fatal() {
        let err = SolverConfig::from_toml_str("max_guesses = 6").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn zero_tries_rejected() {
        let err = SolverConfig::from_toml_str("max_tries = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn bad_opener_rejected() {
        let err = SolverConfig::from_toml_str("[openers]\npattern = \"rai5e\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("pattern")));
    }

    #[test]
    fn empty_opener_disables_shortcut() {
        let config = SolverConfig::from_toml_str("[openers]\nfrequency = \"\"").unwrap();
        assert_eq!(config.opener(), None);
    }

    #[test]
    fn opener_follows_algorithm_and_scope() {
        let config = SolverConfig::new().with_solver_algorithm(SolverAlgorithm::InformationTheory);
        assert_eq!(config.opener(), Some("raise"));
        assert_eq!(
            config.clone().with_entropy_scope(EntropyScope::Letter).opener(),
            Some("slate")
        );
        assert_eq!(
            config
                .with_entropy_scope(EntropyScope::PatternWithLookahead)
                .opener(),
            Some("slate")
        );
    }

    #[test]
    fn names_parse_in_either_case_style() {
        assert_eq!(
            "information-theory".parse::<SolverAlgorithm>().unwrap(),
            SolverAlgorithm::InformationTheory
        );
        assert_eq!(
            "static_linear_wordle_list".parse::<LetterScoreAlgorithm>().unwrap(),
            LetterScoreAlgorithm::StaticLinearWordleList
        );
        assert_eq!(
            "Pattern-With-Lookahead".parse::<EntropyScope>().unwrap(),
            EntropyScope::PatternWithLookahead
        );
    }

    #[test]
    fn unknown_name_reports_kind() {
        let err = "bogus".parse::<LetterScoreAlgorithm>().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownOption { kind: "letter score algorithm", ref value } if value == "bogus"
        ));
    }

    #[test]
    fn display_matches_toml_name() {
        for &algorithm in LetterScoreAlgorithm::ALL {
            let toml = format!("letter_score_algorithm = \"{algorithm}\"");
            let config = SolverConfig::from_toml_str(&toml).unwrap();
            assert_eq!(config.letter_score_algorithm, algorithm);
        }
    }

    #[test]
    fn only_dynamic_table_is_dynamic() {
        let dynamic: Vec<_> = LetterScoreAlgorithm::ALL
            .iter()
            .filter(|a| a.is_dynamic())
            .collect();
        assert_eq!(
            dynamic,
            vec![&LetterScoreAlgorithm::DynamicProportionalWordleList]
        );
    }

    #[test]
    fn config_serializes_back_to_toml() {
        let config = SolverConfig::new().with_guess_pool(GuessPool::Dictionary);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(SolverConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = SolverConfig::load("/nonexistent/wordle.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
