//! Error types for the menu group store.

use thiserror::Error;

/// Errors that can occur during menu group operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuGroupError {
    /// An error occurred while communicating with the store actor.
    #[error("Menu group store error: {0}")]
    ActorCommunicationError(String),
}
