//! Letter-frequency scoring
//!
//! Ranks words by the summed weight of the letters they would reveal.

mod score_table;
mod scorer;

pub use score_table::ScoreTable;
pub use scorer::{FrequencyStrategy, score_word};
