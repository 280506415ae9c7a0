//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max).max(0.0) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar
///
/// Full width is log₂ of the candidate count, the most a guess could reveal.
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// `guess` or `guesses`
#[must_use]
pub const fn guesses_noun(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
