//! Error types for the reasoner

use thiserror::Error;

use crate::config::ReasoningProfile;

/// Result type alias for reasoner operations
pub type Result<T> = std::result::Result<T, ReasoningError>;

/// Errors that abort an inference run
///
/// Every variant is fatal to the call that raised it; no partial result is
/// returned.
#[derive(Error, Debug)]
pub enum ReasoningError {
    /// The fixed point was not reached within `max_depth` passes
    #[error(
        "Maximum inference depth of {limit} passes exceeded before reaching a fixed point; \
         the ontology may contain a cycle or the limit is too low"
    )]
    MaxDepthExceeded { limit: usize },

    /// More than `max_inferences` triples would have been derived
    #[error(
        "Maximum of {limit} inferred triples exceeded; \
         the ontology may contain a cycle or the limit is too low"
    )]
    MaxInferencesExceeded { limit: usize },

    /// A rule reported an internal failure
    #[error("Rule {rule_id} failed: {message}")]
    RuleFailed { rule_id: String, message: String },

    /// A configuration value is out of range
    #[error("Invalid reasoning config: {0}")]
    InvalidConfig(String),

    /// No rule set is registered for the requested profile
    #[error("No rule set registered for profile {0}")]
    UnknownProfile(ReasoningProfile),

    /// A rule id was requested that the rule set does not contain
    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    /// Reading from the triple store failed
    #[error("Store error: {0}")]
    Store(#[from] strata_core::Error),
}

impl ReasoningError {
    /// The configured limit, for limit failures
    pub fn limit(&self) -> Option<usize> {
        match self {
            ReasoningError::MaxDepthExceeded { limit }
            | ReasoningError::MaxInferencesExceeded { limit } => Some(*limit),
            _ => None,
        }
    }

    /// Whether this error was raised by a limit rather than a failure
    pub fn is_limit(&self) -> bool {
        self.limit().is_some()
    }

    pub fn rule_failed(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        ReasoningError::RuleFailed {
            rule_id: rule_id.into(),
            message: message.into(),
        }
    }
}
