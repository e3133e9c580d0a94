//! Error types.
//!
//! Aligning a word with its reading never fails. These errors come from configuring an [`Aligner`](crate::Aligner)
//! and from reading records.

/// Result type with [`FuriganaError`] as the default error.
pub type Result<T, E = FuriganaError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum FuriganaError {
    /// The separator would be removed or rewritten before the reading is split.
    #[error("cannot use {0:?} as a separator: readings are stripped of whitespace and katakana are normalized")]
    InvalidSeparator(char),

    /// A record line had no tab between the word and its reading.
    #[error("line {line}: expected a word and its reading separated by a tab")]
    MissingReading { line: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
