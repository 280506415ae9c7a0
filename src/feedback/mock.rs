//! Feedback from a known target word

use super::FeedbackSource;
use crate::core::{Pattern, Word};
use crate::error::FeedbackError;
use log::trace;

/// Scores guesses against a fixed target
///
/// # Examples
/// ```
/// use wordle_solver::core::Word;
/// use wordle_solver::feedback::{FeedbackSource, MockFeedback};
///
/// let mut source = MockFeedback::new("cigar").unwrap();
/// let pattern = source.submit(&Word::new("cacti").unwrap(), 1).unwrap();
/// assert_eq!(pattern.to_string(), "21001");
/// ```
#[derive(Debug, Clone)]
pub struct MockFeedback {
    target: Word,
}

impl MockFeedback {
    /// # Errors
    /// Returns `FeedbackError::InvalidTarget` if `target` is not a five-letter word.
    pub fn new(target: &str) -> Result<Self, FeedbackError> {
        Ok(Self::from_word(Word::new(target)?))
    }

    #[must_use]
    pub const fn from_word(target: Word) -> Self {
        Self { target }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

impl FeedbackSource for MockFeedback {
    fn submit(&mut self, guess: &Word, attempt: usize) -> Result<Pattern, FeedbackError> {
        let pattern = Pattern::calculate(guess, &self.target);
        trace!("try {attempt}: {guess} against {} -> {pattern}", self.target);
        Ok(pattern)
    }
}
