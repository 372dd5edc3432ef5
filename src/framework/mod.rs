//! # Store Framework
//!
//! The generic engine behind every store in the menu subsystem. It implements
//! the actor flavour of a key-value store: each entity type is owned by a
//! single [`StoreActor`] task that holds the records in memory and processes
//! requests sequentially over a channel.
//!
//! ## Why actors for storage?
//!
//! The menu subsystem needs three guarantees from its stores:
//! - **Stable snapshots**: every lookup sees a consistent view.
//! - **Read-your-writes**: a creation call sees the prices it just resolved.
//! - **Write atomicity**: two concurrent menu creations never interleave
//!   their writes.
//!
//! Sequential message processing gives us all three without a single lock.
//! Each [`StoreActor`] owns its `HashMap` exclusively; concurrency exists
//! *between* stores, never *within* one.
//!
//! ## Layers
//!
//! 1. **Entity layer** ([`StoreEntity`]) - what a stored record looks like
//!    and how it validates itself on creation.
//! 2. **Runtime layer** ([`StoreActor`]) - the message loop owning the
//!    records.
//! 3. **Interface layer** ([`StoreClient`], [`EntityStore`]) - type-safe
//!    async access from the rest of the application.
//!
//! See [`mock`] for testing store wrappers without spawning actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store_trait;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use store_trait::EntityStore;
