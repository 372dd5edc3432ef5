//! Error types for the product store.

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The product price is invalid (negative).
    #[error("Invalid product price: {0}")]
    InvalidPrice(String),

    /// An error occurred while communicating with the store actor.
    #[error("Product store error: {0}")]
    ActorCommunicationError(String),
}
