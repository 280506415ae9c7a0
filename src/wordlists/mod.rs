//! Word lists for Wordle solving
//!
//! Provides the dictionary compiled into the binary, plus a loader for
//! other lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
