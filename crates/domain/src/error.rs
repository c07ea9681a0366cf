//! Domain error types.

use thiserror::Error;

/// Errors that can occur during domain operations.
///
/// Commands issued against a live aggregate never fail; these errors only
/// arise when an aggregate is rebuilt from an externally supplied history.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A recorded event has no transition rule on the target aggregate.
    #[error("Unhandled event kind: {event_type} for aggregate {aggregate_type}")]
    UnhandledEventKind {
        aggregate_type: String,
        event_type: String,
    },

    /// A recorded history cannot have been produced by the aggregate.
    #[error("Invalid history: {reason}")]
    InvalidHistory { reason: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DomainError {
    pub(crate) fn invalid_history(reason: impl Into<String>) -> Self {
        DomainError::InvalidHistory {
            reason: reason.into(),
        }
    }
}
