//! errors.rs - Custom error types for the wordsieve-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `wordsieve-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SieveError {
    /// The word has no content characters once normalized, or has too many.
    #[error("Invalid word: {0}")]
    InvalidWord(String),

    #[error("Failed to compile noise pattern '{0}': {1}")]
    InvalidNoisePattern(String, regex::Error),

    #[error("Failed to read dictionary '{source_name}': {io}")]
    DictionaryRead {
        source_name: String,
        #[source]
        io: std::io::Error,
    },

    #[error("Failed to fetch dictionary: {0}")]
    DictionaryFetch(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}

impl SieveError {
    /// True for errors caused by caller input rather than by the environment.
    pub fn is_validation(&self) -> bool {
        matches!(self, SieveError::InvalidWord(_))
    }
}

/// Result type alias for wordsieve-core operations.
pub type Result<T> = std::result::Result<T, SieveError>;
