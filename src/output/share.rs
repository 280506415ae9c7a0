//! Share text in the format the puzzle site produces
//!
//! ```text
//! Wordle 196 3/6
//!
//! ⬜🟨⬜⬜⬜
//! 🟩⬜🟨⬜⬜
//! 🟩🟩🟩🟩🟩
//!
//! 2 seconds
//! ```

use crate::core::Pattern;
use crate::results::GameRecord;
use std::fmt::Write;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Day of puzzle number 0, 2021-06-19, in seconds since the Unix epoch
const FIRST_PUZZLE_SECS: u64 = 1_624_060_800;

const SECS_PER_DAY: u64 = 86_400;

/// Puzzle number for the day `now` falls on
///
/// Whole days since 2021-06-19 (UTC); 0 for anything earlier.
///
/// # Examples
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use wordle_solver::output::share::puzzle_number;
///
/// // 2022-01-01
/// let new_year = UNIX_EPOCH + Duration::from_secs(1_640_995_200);
/// assert_eq!(puzzle_number(new_year), 196);
/// ```
#[must_use]
pub fn puzzle_number(now: SystemTime) -> u64 {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map_or(0, |since| since.as_secs());
    secs.saturating_sub(FIRST_PUZZLE_SECS) / SECS_PER_DAY
}

/// Emoji grid for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCard {
    rows: Vec<Pattern>,
    won: bool,
    elapsed: Duration,
}

impl ShareCard {
    #[must_use]
    pub fn from_record(record: &GameRecord) -> Self {
        Self {
            rows: record.patterns().collect(),
            won: record.won(),
            elapsed: record.elapsed,
        }
    }

    /// Render the share text
    ///
    /// The score reads `X` for a game that was not won.
    #[must_use]
    pub fn render(&self, puzzle: u64, max_tries: usize) -> String {
        let score = if self.won {
            self.rows.len().to_string()
        } else {
            "X".to_string()
        };

        let mut text = format!("Wordle {puzzle} {score}/{max_tries}\n\n");
        let grid: Vec<String> = self.rows.iter().map(|row| row.to_emoji()).collect();
        text.push_str(&grid.join("\n"));
        let _ = write!(
            text,
            "\n\n{} seconds\n",
            self.elapsed.as_secs_f64().round() as u64
        );
        text
    }
}
