//! Main Wordle solver interface

use crate::board::{Board, Suggestion};
use crate::config::SolverConfig;
use crate::core::{Pattern, Word};
use crate::error::{ConfigError, FeedbackError};
use crate::feedback::FeedbackSource;
use crate::results::{GameOutcome, GameRecord, ResultSink, Turn};
use log::{debug, info};
use std::time::Instant;

/// Where a game stands between two steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// The board has to pick the next word
    AwaitingGuess,
    /// The word has to be played and scored
    AwaitingFeedback(Word),
    Won,
    /// Out of tries
    Exhausted,
    /// No word fits the feedback
    Unsolvable,
}

impl GameState {
    /// The outcome, once the game is over
    #[must_use]
    pub const fn outcome(&self) -> Option<GameOutcome> {
        match self {
            Self::AwaitingGuess | Self::AwaitingFeedback(_) => None,
            Self::Won => Some(GameOutcome::Won),
            Self::Exhausted => Some(GameOutcome::Exhausted),
            Self::Unsolvable => Some(GameOutcome::Unsolvable),
        }
    }
}

/// Main Wordle solver
///
/// Plays whole games against a feedback source, one guess per try.
#[derive(Debug, Clone)]
pub struct Solver {
    board: Board,
    max_tries: usize,
}

impl Solver {
    /// Create a solver from a configuration and a dictionary
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` if the configuration does not validate.
    pub fn new(config: &SolverConfig, dictionary: Vec<Word>) -> Result<Self, ConfigError> {
        let board = Board::from_config(config, dictionary)?;
        Ok(Self::from_board(board, config.max_tries))
    }

    /// Wrap a board that is already set up
    #[must_use]
    pub const fn from_board(board: Board, max_tries: usize) -> Self {
        Self { board, max_tries }
    }

    /// Next suggested guess
    #[must_use]
    pub fn solve(&self) -> Suggestion {
        self.board.solve()
    }

    /// Apply the feedback for `guess`
    pub fn check(&mut self, guess: &Word, pattern: Pattern) {
        self.board.apply_feedback(guess, pattern);
    }

    /// Start over with the whole dictionary
    pub fn reset(&mut self) {
        self.board.reset();
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.max_tries
    }

    /// Play one full game
    ///
    /// Resets the board, then alternates between picking a guess and asking
    /// `source` to score it until the target is found, the tries run out or
    /// no candidate is left. The finished record goes to `source` and then
    /// to `results`.
    ///
    /// # Errors
    /// Any error from `source` ends the game; nothing is reported to
    /// `results` in that case.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::config::SolverConfig;
    /// use wordle_solver::feedback::MockFeedback;
    /// use wordle_solver::results::GameResults;
    /// use wordle_solver::solver::Solver;
    /// use wordle_solver::wordlists::{WORDS, loader::words_from_slice};
    ///
    /// let mut solver = Solver::new(&SolverConfig::default(), words_from_slice(WORDS)).unwrap();
    /// let mut results = GameResults::new();
    ///
    /// let record = solver.play(&mut MockFeedback::new("cigar").unwrap(), &mut results).unwrap();
    /// assert!(record.won());
    /// assert_eq!(results.len(), 1);
    /// ```
    pub fn play<F, S>(&mut self, source: &mut F, results: &mut S) -> Result<GameRecord, FeedbackError>
    where
        F: FeedbackSource + ?Sized,
        S: ResultSink + ?Sized,
    {
        let start = Instant::now();
        self.reset();
        source.open()?;
        info!(
            "new game: {} candidates, {} tries",
            self.board.candidates().len(),
            self.max_tries
        );

        let mut turns: Vec<Turn> = Vec::with_capacity(self.max_tries);
        let mut state = GameState::AwaitingGuess;

        let outcome = loop {
            if let Some(outcome) = state.outcome() {
                break outcome;
            }

            state = match state {
                GameState::AwaitingGuess if turns.len() >= self.max_tries => GameState::Exhausted,
                GameState::AwaitingGuess => match self.solve() {
                    Suggestion::Guess(guess) => GameState::AwaitingFeedback(guess),
                    Suggestion::NoCandidates => GameState::Unsolvable,
                },
                GameState::AwaitingFeedback(guess) => {
                    let attempt = turns.len() + 1;
                    debug!("try {attempt}: {guess}");

                    let pattern = source.submit(&guess, attempt)?;
                    self.check(&guess, pattern);
                    turns.push(Turn {
                        guess,
                        pattern,
                        remaining: self.board.candidates().len(),
                    });

                    if pattern.is_perfect() {
                        GameState::Won
                    } else {
                        GameState::AwaitingGuess
                    }
                }
                finished => finished,
            };
        };

        let record = GameRecord {
            outcome,
            tries: turns.len(),
            elapsed: start.elapsed(),
            turns,
        };

        match (outcome, record.final_guess()) {
            (GameOutcome::Won, Some(word)) => info!("solved: {word} in {} tries", record.tries),
            _ => info!("not solved ({outcome:?}) after {} tries", record.tries),
        }

        source.finished(&record)?;
        results.record(&record);
        Ok(record)
    }
}
