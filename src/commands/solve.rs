//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::{Pattern, Word};
use crate::error::FeedbackError;
use crate::feedback::MockFeedback;
use crate::results::{GameRecord, GameResults};
use crate::solver::Solver;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub record: GameRecord,
    pub steps: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.record.won()
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy figures for the guess; `None` when only one candidate was left
    pub metrics: Option<GuessMetrics>,
}

/// Solve a specific word using the given solver
///
/// # Errors
///
/// Returns `FeedbackError::InvalidTarget` if the target is not a five-letter word.
pub fn solve_word(solver: &mut Solver, target: &str) -> Result<SolveResult, FeedbackError> {
    let mut source = MockFeedback::new(target)?;
    let record = solver.play(&mut source, &mut GameResults::new())?;
    let steps = replay(solver, &record);

    Ok(SolveResult {
        target: source.target().clone(),
        record,
        steps,
    })
}

/// Walk the game again to measure each guess against the candidates it faced
fn replay(solver: &Solver, record: &GameRecord) -> Vec<GuessStep> {
    let mut board = solver.board().clone();
    board.reset();

    record
        .turns
        .iter()
        .map(|turn| {
            let candidates_before = board.candidates().len();
            let metrics = (candidates_before > 1)
                .then(|| calculate_metrics(&turn.guess, board.candidates()));
            board.apply_feedback(&turn.guess, turn.pattern);

            GuessStep {
                word: turn.guess.clone(),
                pattern: turn.pattern,
                candidates_before,
                candidates_after: turn.remaining,
                metrics,
            }
        })
        .collect()
}
