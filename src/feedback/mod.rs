//! Where feedback comes from
//!
//! The solver plays against a [`FeedbackSource`]: it submits a guess and gets
//! the outcome pattern back. [`MockFeedback`] knows the target and scores
//! guesses itself; [`TerminalFeedback`] asks a person to relay what the real
//! game showed.

mod mock;
mod terminal;

pub use mock::MockFeedback;
pub use terminal::TerminalFeedback;

use crate::core::{Pattern, Word};
use crate::error::FeedbackError;
use crate::results::GameRecord;

/// A game the solver can submit guesses to
pub trait FeedbackSource {
    /// Called once before the first guess of a game
    ///
    /// # Errors
    /// Source-specific; the game does not start.
    fn open(&mut self) -> Result<(), FeedbackError> {
        Ok(())
    }

    /// Play `guess` as try number `attempt` (1-based) and report the outcome
    ///
    /// # Errors
    /// Source-specific; the game is abandoned.
    fn submit(&mut self, guess: &Word, attempt: usize) -> Result<Pattern, FeedbackError>;

    /// Called once after the game ends
    ///
    /// # Errors
    /// Source-specific.
    fn finished(&mut self, record: &GameRecord) -> Result<(), FeedbackError> {
        let _ = record;
        Ok(())
    }
}
