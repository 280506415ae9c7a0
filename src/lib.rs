//! Wordle Solver
//!
//! Picks successive guesses for the five-letter word puzzle. A [`board::Board`]
//! narrows the dictionary with every piece of feedback; a scorer ranks what is
//! left, either by letter frequency or by expected information gain.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_solver::config::SolverConfig;
//! use wordle_solver::feedback::MockFeedback;
//! use wordle_solver::results::GameResults;
//! use wordle_solver::solver::Solver;
//! use wordle_solver::wordlists::{WORDS, loader::words_from_slice};
//!
//! let mut solver = Solver::new(&SolverConfig::default(), words_from_slice(WORDS)).unwrap();
//! let mut results = GameResults::new();
//!
//! let record = solver.play(&mut MockFeedback::new("utter").unwrap(), &mut results).unwrap();
//! println!("solved: {} in {} tries", record.won(), record.tries);
//! ```

// Core domain types
pub mod core;

// Candidate tracking
pub mod board;

// Solving algorithms
pub mod solver;

// Where feedback comes from
pub mod feedback;

// Game records and statistics
pub mod results;

// Configuration, errors and logging
pub mod config;
pub mod error;
pub mod logging;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
