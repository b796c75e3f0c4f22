//! Error types for the transcription engine.
//!
//! Only programming and configuration mistakes are errors here. A word that
//! cannot be resolved is an ordinary [`crate::Lookup`] outcome.

/// Errors surfaced to callers of the library.
#[derive(thiserror::Error, Debug)]
pub enum TranscribeError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown failure strategy: {0}")]
    UnknownStrategy(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Unexpected failure inside an extractor.
///
/// Kept apart from a plain miss so tests can tell a broken rule from a word
/// the dictionary does not know.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Invalid pattern: {0}")]
    Pattern(String),
}

pub type TranscribeResult<T> = Result<T, TranscribeError>;
