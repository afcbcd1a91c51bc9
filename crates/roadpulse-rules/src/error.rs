//! Error types for the roadpulse-rules crate.

use thiserror::Error;

/// Errors that can occur in the rule engine.
#[derive(Debug, Error)]
pub enum RuleError {
    /// Invalid rule configuration (missing name, unknown priority, ...).
    #[error("invalid rule: {reason}")]
    InvalidRule {
        /// The reason the rule is invalid.
        reason: String,
    },

    /// Rule with the given ID was not found.
    #[error("rule not found: {id}")]
    RuleNotFound {
        /// The rule ID that was not found.
        id: String,
    },

    /// The rule store could not be reached or queried.
    #[error("rule store unavailable: {reason}")]
    StoreUnavailable {
        /// The reason the store is unavailable.
        reason: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RuleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for rule operations.
pub type Result<T> = std::result::Result<T, RuleError>;
