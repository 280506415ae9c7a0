//! Word analysis command
//!
//! Scores one word with every scorer against a set of candidates.

use crate::board::Constraints;
use crate::config::LetterScoreAlgorithm;
use crate::core::Word;
use crate::error::WordError;
use crate::solver::entropy::{PositionalFrequencies, calculate_metrics};
use crate::solver::frequency::{ScoreTable, score_word};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    /// Whether the word is in the dictionary it was checked against
    pub in_dictionary: bool,
    pub entropy: f64,
    pub letter_entropy: f64,
    pub lookahead_score: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub frequency_score: f64,
    pub letter_score_algorithm: LetterScoreAlgorithm,
    pub total_candidates: usize,
}

/// Analyze a word against a set of candidates
///
/// `constraints` decides which letters the frequency score treats as known;
/// pass an empty set for an opening guess.
///
/// # Errors
///
/// Returns `WordError` if the word is not five ASCII letters.
pub fn analyze_word(
    word: &str,
    dictionary: &[Word],
    candidates: &[Word],
    constraints: &Constraints,
    letter_score_algorithm: LetterScoreAlgorithm,
) -> Result<AnalysisResult, WordError> {
    let word = Word::new(word)?;

    let metrics = calculate_metrics(&word, candidates);
    let letter_entropy = PositionalFrequencies::new(candidates).letter_entropy(&word);
    let table = ScoreTable::build(letter_score_algorithm, candidates);

    Ok(AnalysisResult {
        in_dictionary: dictionary.contains(&word),
        entropy: metrics.entropy,
        letter_entropy,
        lookahead_score: metrics.lookahead_score(),
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        frequency_score: score_word(&word, &table, constraints.known_letters()),
        letter_score_algorithm,
        total_candidates: candidates.len(),
        word,
    })
}
