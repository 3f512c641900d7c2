//! Crate error type

use thiserror::Error;

/// Errors raised by the word counter core
#[derive(Error, Debug)]
pub enum WordCounterError {
    /// The backing store refused a read or write
    #[error("storage error: {0}")]
    Storage(String),

    /// Stored records could not be parsed or encoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Save attempted with an empty textarea
    #[error("cannot save empty text")]
    EmptyText,
}

pub type Result<T> = std::result::Result<T, WordCounterError>;
