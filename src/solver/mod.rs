//! Wordle solving algorithms
//!
//! Scorers rank a guess pool against the current candidates; the engine
//! plays whole games with whichever scorer the configuration picks.

mod engine;
pub mod entropy;
pub mod frequency;
pub mod selection;
pub mod strategy;

pub use engine::{GameState, Solver};
pub use strategy::{
    LetterEntropyStrategy, LookaheadStrategy, PatternEntropyStrategy, Strategy, StrategyType,
};
