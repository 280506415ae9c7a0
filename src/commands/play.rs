//! Interactive play against the real puzzle
//!
//! The solver suggests each word; the player types it into the game and
//! relays the colours back.

use crate::error::FeedbackError;
use crate::feedback::TerminalFeedback;
use crate::results::{GameRecord, GameResults};
use crate::solver::Solver;
use std::io::{BufRead, Write};

/// Play one game, reading feedback from `input` and prompting on `output`
///
/// # Errors
///
/// Returns `FeedbackError::Aborted` if the player quits or input ends, and
/// `FeedbackError::Io` if the terminal cannot be read or written.
pub fn run_play<R: BufRead, W: Write>(
    solver: &mut Solver,
    input: R,
    output: W,
) -> Result<GameRecord, FeedbackError> {
    let mut source = TerminalFeedback::new(input, output);
    solver.play(&mut source, &mut GameResults::new())
}
