//! # Framework Errors
//!
//! Failures of the store plumbing itself, shared by every store. Entity-level
//! rejections travel through [`StoreError::EntityError`] and are mapped back
//! to their concrete type by the domain store wrappers.

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    ActorClosed,
    #[error("Store dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
