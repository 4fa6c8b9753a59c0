//! Error types for strata-core

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Triple store errors (read failures, backend unavailable)
    #[error("Store error: {0}")]
    Store(String),

    /// A term could not be parsed or is not valid in its position
    #[error("Invalid term: {0}")]
    InvalidTerm(String),
}

impl Error {
    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Error::Store(msg.into())
    }

    /// Create an invalid term error
    pub fn invalid_term(msg: impl Into<String>) -> Self {
        Error::InvalidTerm(msg.into())
    }
}
