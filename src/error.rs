//! Error types for the library.
//!
//! Errors raised by user-supplied pipeline functions are never wrapped in
//! this type; they reach the caller as-is.

use thiserror::Error;

/// Errors produced by the size and chunking utilities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A byte count below zero was given to the size formatter.
    #[error("byte count cannot be negative: {0}")]
    NegativeSize(i128),

    /// A byte count at or beyond 1024^9 has no unit to be rendered with.
    #[error("byte count {0} is too large to format (limit is 1024^9 bytes)")]
    SizeTooLarge(i128),

    /// A chunk size of zero was requested.
    #[error("chunk size must be a positive integer")]
    InvalidChunkSize,

    /// A size string could not be parsed.
    #[error("invalid size '{0}'")]
    InvalidSize(String),
}

pub type Result<T> = std::result::Result<T, Error>;
