//! Error types for the menu product store.

use thiserror::Error;

/// Errors that can occur during menu product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuProductError {
    /// An error occurred while communicating with the store actor.
    #[error("Menu product store error: {0}")]
    ActorCommunicationError(String),
}
