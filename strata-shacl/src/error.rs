//! SHACL error types

use strata_reasoner::ReasoningError;
use thiserror::Error;

/// Result type for SHACL operations
pub type Result<T> = std::result::Result<T, ShaclError>;

/// SHACL validation and compilation errors
///
/// These are failures of the validation call itself. Data that does not
/// conform to a shape is reported as a violation, not an error.
#[derive(Debug, Error)]
pub enum ShaclError {
    /// Shape compilation error
    #[error("Failed to compile shape {shape}: {message}")]
    Compilation { shape: String, message: String },

    /// Invalid constraint specification
    #[error("Invalid constraint on shape {shape}: {message}")]
    InvalidConstraint { shape: String, message: String },

    /// Scoped inference used for focus node resolution failed
    #[error("Reasoning error during validation: {0}")]
    Reasoning(#[from] ReasoningError),

    /// SHACL validation failed
    ///
    /// Contains a summary of the validation failures.
    #[error("SHACL validation failed: {violation_count} violation(s)")]
    ValidationFailed {
        violation_count: usize,
        /// Detailed messages for each violation (truncated if too many)
        details: Vec<String>,
    },
}

impl ShaclError {
    pub fn compilation(shape: impl ToString, message: impl Into<String>) -> Self {
        ShaclError::Compilation {
            shape: shape.to_string(),
            message: message.into(),
        }
    }

    pub fn invalid_constraint(shape: impl ToString, message: impl Into<String>) -> Self {
        ShaclError::InvalidConstraint {
            shape: shape.to_string(),
            message: message.into(),
        }
    }
}
