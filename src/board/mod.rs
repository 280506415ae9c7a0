//! Game board: candidate tracking and guess suggestion
//!
//! The board owns the dictionary, the words still consistent with the
//! feedback so far, and the [`Constraints`] that feedback produced. Every
//! feedback update refilters the candidates; [`Board::solve`] hands the
//! survivors to the configured strategy.

mod constraints;

pub use constraints::{ConfirmedPositions, Constraints, LetterConstraint};

use crate::config::{GuessPool, SolverConfig};
use crate::core::{Pattern, Word};
use crate::error::ConfigError;
use crate::solver::{Strategy, StrategyType};
use log::{debug, warn};
use rustc_hash::FxHashSet;

/// What the board recommends next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// Play this word
    Guess(Word),
    /// No dictionary word fits the feedback
    NoCandidates,
}

impl Suggestion {
    /// The suggested word, if there is one
    #[must_use]
    pub const fn guess(&self) -> Option<&Word> {
        match self {
            Self::Guess(word) => Some(word),
            Self::NoCandidates => None,
        }
    }
}

/// Candidate-tracking state for one game at a time
#[derive(Debug, Clone)]
pub struct Board {
    dictionary: Vec<Word>,
    candidates: Vec<Word>,
    constraints: Constraints,
    feedback_count: usize,
    strategy: StrategyType,
    guess_pool: GuessPool,
    opener: Option<Word>,
}

impl Board {
    /// Create a board that picks guesses with `strategy`
    ///
    /// Guesses come from the candidates and there is no opener.
    #[must_use]
    pub fn new(dictionary: Vec<Word>, strategy: StrategyType) -> Self {
        Self {
            candidates: dictionary.clone(),
            dictionary,
            constraints: Constraints::new(),
            feedback_count: 0,
            strategy,
            guess_pool: GuessPool::default(),
            opener: None,
        }
    }

    /// Create a board from a configuration
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` if the configuration does not validate.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::board::{Board, Suggestion};
    /// use wordle_solver::config::SolverConfig;
    /// use wordle_solver::wordlists::{WORDS, loader::words_from_slice};
    ///
    /// let mut board = Board::from_config(&SolverConfig::default(), words_from_slice(WORDS)).unwrap();
    /// assert_eq!(board.solve().guess().map(|w| w.text()), Some("irate"));
    /// ```
    pub fn from_config(config: &SolverConfig, dictionary: Vec<Word>) -> Result<Self, ConfigError> {
        config.validate()?;

        let opener = config
            .opener()
            .map(Word::new)
            .transpose()
            .map_err(|e| ConfigError::Invalid(format!("opener: {e}")))?;

        Ok(Self::new(dictionary, StrategyType::from_config(config))
            .with_guess_pool(config.guess_pool)
            .with_opener(opener))
    }

    /// First guess of every game, used while it is still a candidate
    #[must_use]
    pub fn with_opener(mut self, opener: Option<Word>) -> Self {
        self.opener = opener;
        self
    }

    #[must_use]
    pub const fn with_guess_pool(mut self, guess_pool: GuessPool) -> Self {
        self.guess_pool = guess_pool;
        self
    }

    /// Start a new game: every dictionary word is a candidate again
    pub fn reset(&mut self) {
        self.candidates.clone_from(&self.dictionary);
        self.constraints.clear();
        self.feedback_count = 0;
    }

    /// Whether `word` agrees with all feedback this game
    #[must_use]
    pub fn is_consistent(&self, word: &Word) -> bool {
        self.constraints.admits(word)
    }

    /// Record the feedback for `guess` and drop candidates it rules out
    pub fn apply_feedback(&mut self, guess: &Word, pattern: Pattern) {
        self.constraints.apply(guess, pattern);
        self.feedback_count += 1;

        let before = self.candidates.len();
        let constraints = &self.constraints;
        self.candidates.retain(|word| constraints.admits(word));

        debug!(
            "{guess} {pattern}: {before} -> {} candidates",
            self.candidates.len()
        );
    }

    /// Suggest the next guess
    ///
    /// The opener is played first while it is still a candidate, a lone
    /// candidate is played directly, and anything else goes to the strategy.
    pub fn solve(&self) -> Suggestion {
        if self.candidates.is_empty() {
            warn!(
                "no candidates left after {} feedback updates",
                self.feedback_count
            );
            return Suggestion::NoCandidates;
        }

        if self.feedback_count == 0
            && let Some(opener) = &self.opener
            && self.candidates.contains(opener)
        {
            return Suggestion::Guess(opener.clone());
        }

        if let [only] = self.candidates.as_slice() {
            return Suggestion::Guess(only.clone());
        }

        let choice = match self.guess_pool {
            GuessPool::Candidates => {
                self.strategy
                    .select_guess(&self.candidates, &self.candidates, &self.constraints)
                    .cloned()
            }
            GuessPool::Dictionary => {
                let pool = self.dictionary_pool();
                self.strategy
                    .select_guess(&pool, &self.candidates, &self.constraints)
                    .cloned()
            }
        };

        choice.map_or(Suggestion::NoCandidates, Suggestion::Guess)
    }

    /// Candidates first, then the rest of the dictionary
    fn dictionary_pool(&self) -> Vec<Word> {
        let candidates: FxHashSet<&Word> = self.candidates.iter().collect();
        let rest = self
            .dictionary
            .iter()
            .filter(|word| !candidates.contains(word));

        self.candidates.iter().chain(rest).cloned().collect()
    }

    /// Words still consistent with the feedback, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Feedback updates applied this game
    #[must_use]
    pub const fn feedback_count(&self) -> usize {
        self.feedback_count
    }

    #[must_use]
    pub const fn strategy(&self) -> &StrategyType {
        &self.strategy
    }
}
