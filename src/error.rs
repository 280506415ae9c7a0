//! Error types
//!
//! Each concern gets its own enum so callers can match on what actually failed.

use thiserror::Error;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    #[error("Word must contain only ASCII letters")]
    NonAscii,

    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

/// Error for feedback strings that do not describe five positions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid pattern '{0}': expected five of 2/1/0, G/Y/- or 🟩/🟨/⬜")]
pub struct PatternError(pub String);

/// Configuration error
///
/// Raised when a solver is built from a configuration that names an unknown
/// algorithm or carries values the solver cannot work with.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown {kind}: '{value}'")]
    UnknownOption { kind: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Failure reported by a feedback source
///
/// Any of these ends the current game; the orchestrator does not retry.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Feedback aborted by the player")]
    Aborted,

    #[error("Invalid target word: {0}")]
    InvalidTarget(#[from] WordError),
}
