//! Error types for menu creation.

use thiserror::Error;

/// Errors that can occur during menu operations.
///
/// Validation failures are all `InvalidArgument`: they are deterministic,
/// so retrying with the same payload can never succeed and the caller only
/// needs the offending field and reason to render a message. Store-layer
/// failures surface as `ActorCommunicationError` and are never folded into
/// `InvalidArgument`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The menu payload violated a creation rule.
    #[error("Invalid menu argument ({field}): {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    /// An error occurred while communicating with a store actor.
    #[error("Menu store error: {0}")]
    ActorCommunicationError(String),
}

impl MenuError {
    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}
