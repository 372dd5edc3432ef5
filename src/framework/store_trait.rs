//! # EntityStore Trait
//!
//! Provides a common interface for the domain-specific store wrappers,
//! adding default `find_by_id` and `find_all` methods on top of a generic
//! [`StoreClient`].

use crate::framework::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for domain store wrappers to inherit the standard lookup surface.
///
/// Each wrapper (menu group store, product store, ...) implements `inner`
/// and `map_error` and gets the lookups for free; only `save` differs per
/// entity because of its payload type.
#[async_trait]
pub trait EntityStore<T: StoreEntity>: Send + Sync {
    /// The store-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map framework errors to the specific store error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_by_id(id).await.map_err(Self::map_error)
    }

    /// Fetch a snapshot of every record in the store.
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_all().await.map_err(Self::map_error)
    }
}
