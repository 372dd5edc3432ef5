//! # StoreEntity Trait
//!
//! The contract every stored record type (MenuGroup, Product, Menu, ...) must
//! implement to be managed by the generic [`StoreActor`](crate::framework::StoreActor).
//!
//! # Architecture Note
//! By defining one contract for all record types we write the store loop
//! *once* and reuse it for every entity in the system. Associated types keep
//! it type-safe: a menu store only accepts a menu creation payload, and the
//! compiler rejects anything else.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by a `StoreActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so that the [`StoreEntity::on_create`] hook
/// can call other stores (e.g. a menu resolving its menu group and products).
/// The `Context` type carries those dependencies; it is injected when the
/// actor starts (`run(context)`), not when it is constructed, which keeps the
/// store wiring free of circular references.
#[async_trait]
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from `u32` so the actor can assign fresh ids.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The payload required to create a new record (identifier-less; the
    /// store assigns the identifier).
    type Create: Send + Sync + Debug;

    /// The runtime dependencies injected into the actor.
    /// Use `()` for stores with no dependencies.
    type Context: Send + Sync;

    /// The error type for this record.
    ///
    /// One error enum per store keeps the client surface simple: callers
    /// match on a single type instead of one error per operation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the assigned id and the payload.
    /// This is the place for synchronous, structural validation; it runs
    /// before [`StoreEntity::on_create`] and before anything is stored.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and immediately before the record is
    /// inserted into the store. Use this hook for validation that needs
    /// other stores. If it fails, nothing is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
