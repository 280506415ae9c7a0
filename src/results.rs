//! Game records and aggregate statistics
//!
//! A [`GameRecord`] is what one game produced. Records are handed to a
//! [`ResultSink`]; [`GameResults`] keeps them and summarises them as
//! [`Stats`].

use crate::core::{Pattern, Word};
use std::time::Duration;

/// One guess and what it taught the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub pattern: Pattern,
    /// Candidates left after applying the feedback
    pub remaining: usize,
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    /// Out of tries
    Exhausted,
    /// The feedback ruled out every dictionary word
    Unsolvable,
}

impl GameOutcome {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Result of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    /// Guesses submitted
    pub tries: usize,
    pub elapsed: Duration,
    pub turns: Vec<Turn>,
}

impl GameRecord {
    /// Whether the target was found
    #[must_use]
    pub const fn won(&self) -> bool {
        self.outcome.is_win()
    }

    /// The last word submitted, the answer when the game was won
    #[must_use]
    pub fn final_guess(&self) -> Option<&Word> {
        self.turns.last().map(|turn| &turn.guess)
    }

    /// Patterns in the order they were received
    pub fn patterns(&self) -> impl Iterator<Item = Pattern> + '_ {
        self.turns.iter().map(|turn| turn.pattern)
    }
}

/// Anything that wants to hear about finished games
pub trait ResultSink {
    fn record(&mut self, record: &GameRecord);
}

/// Summary over a set of games
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub words: usize,
    pub wins: usize,
    /// Percentage of games won
    pub win_rate: f64,
    pub avg_tries: f64,
    pub median_tries: usize,
    pub sd_tries: f64,
    /// Milliseconds
    pub avg_time_ms: f64,
    /// Milliseconds
    pub sd_time_ms: f64,
}

/// In-memory collection of game records
#[derive(Debug, Clone, Default)]
pub struct GameResults {
    records: Vec<GameRecord>,
}

impl GameResults {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent record
    #[must_use]
    pub fn last(&self) -> Option<&GameRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Aggregate statistics, or `None` before any game
    ///
    /// Standard deviations are population deviations. The median is the
    /// middle element of the sorted tries (the upper one for an even count).
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use wordle_solver::results::{GameOutcome, GameRecord, GameResults, ResultSink};
    ///
    /// let mut results = GameResults::new();
    /// assert!(results.stats().is_none());
    ///
    /// for (outcome, tries) in [(GameOutcome::Won, 3), (GameOutcome::Exhausted, 6)] {
    ///     results.record(&GameRecord {
    ///         outcome,
    ///         tries,
    ///         elapsed: Duration::from_millis(10),
    ///         turns: Vec::new(),
    ///     });
    /// }
    ///
    /// let stats = results.stats().unwrap();
    /// assert_eq!(stats.wins, 1);
    /// assert_eq!(stats.win_rate, 50.0);
    /// assert_eq!(stats.avg_tries, 4.5);
    /// assert_eq!(stats.median_tries, 6);
    /// ```
    #[must_use]
    pub fn stats(&self) -> Option<Stats> {
        if self.records.is_empty() {
            return None;
        }

        let words = self.records.len();
        let wins = self.records.iter().filter(|r| r.won()).count();

        let tries: Vec<f64> = self.records.iter().map(|r| r.tries as f64).collect();
        let times: Vec<f64> = self
            .records
            .iter()
            .map(|r| r.elapsed.as_secs_f64() * 1000.0)
            .collect();

        let mut sorted: Vec<usize> = self.records.iter().map(|r| r.tries).collect();
        sorted.sort_unstable();

        let (avg_tries, sd_tries) = mean_and_deviation(&tries);
        let (avg_time_ms, sd_time_ms) = mean_and_deviation(&times);

        Some(Stats {
            words,
            wins,
            win_rate: wins as f64 / words as f64 * 100.0,
            avg_tries,
            median_tries: sorted[words / 2],
            sd_tries,
            avg_time_ms,
            sd_time_ms,
        })
    }
}

impl ResultSink for GameResults {
    fn record(&mut self, record: &GameRecord) {
        self.records.push(record.clone());
    }
}

fn mean_and_deviation(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(outcome: GameOutcome, tries: usize, millis: u64) -> GameRecord {
        GameRecord {
            outcome,
            tries,
            elapsed: Duration::from_millis(millis),
            turns: Vec::new(),
        }
    }

    #[test]
    fn empty_results_have_no_stats() {
        let results = GameResults::new();
        assert!(results.is_empty());
        assert!(results.last().is_none());
        assert!(results.stats().is_none());
    }

    #[test]
    fn last_is_most_recent() {
        let mut results = GameResults::new();
        results.record(&record(GameOutcome::Won, 3, 5));
        results.record(&record(GameOutcome::Unsolvable, 2, 5));

        assert_eq!(results.len(), 2);
        assert_eq!(results.last().unwrap().outcome, GameOutcome::Unsolvable);
        assert!(!results.last().unwrap().won());
    }

    #[test]
    fn stats_over_known_games() {
        let mut results = GameResults::new();
        for (tries, millis) in [(2, 10), (4, 20), (4, 30), (6, 40)] {
            results.record(&record(GameOutcome::Won, tries, millis));
        }
        results.record(&record(GameOutcome::Exhausted, 6, 50));

        let stats = results.stats().unwrap();
        assert_eq!(stats.words, 5);
        assert_eq!(stats.wins, 4);
        assert!((stats.win_rate - 80.0).abs() < 1e-9);
        assert!((stats.avg_tries - 4.4).abs() < 1e-9);
        assert_eq!(stats.median_tries, 4);
        // Population deviation of 2, 4, 4, 6, 6 around 4.4
        assert!((stats.sd_tries - 1.496_662_954_709_576_4).abs() < 1e-9);
        assert!((stats.avg_time_ms - 30.0).abs() < 1e-9);
        assert!((stats.sd_time_ms - 200f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn single_game_has_zero_deviation() {
        let mut results = GameResults::new();
        results.record(&record(GameOutcome::Won, 3, 7));

        let stats = results.stats().unwrap();
        assert_eq!(stats.median_tries, 3);
        assert!(stats.sd_tries.abs() < f64::EPSILON);
        assert!(stats.sd_time_ms.abs() < f64::EPSILON);
    }

    #[test]
    fn record_exposes_final_guess_and_patterns() {
        let guess = Word::new("cigar").unwrap();
        let game = GameRecord {
            outcome: GameOutcome::Won,
            tries: 1,
            elapsed: Duration::ZERO,
            turns: vec![Turn {
                guess: guess.clone(),
                pattern: Pattern::PERFECT,
                remaining: 1,
            }],
        };

        assert_eq!(game.final_guess(), Some(&guess));
        assert_eq!(game.patterns().collect::<Vec<_>>(), [Pattern::PERFECT]);
    }
}
