//! # Product Store Actor
//!
//! Stores the sellable items menus reference. Menu creation only reads from
//! this store, so it has no dependencies (`Context = ()`); the single piece
//! of validation it carries is the unit-price bound checked on save.
//!
//! - [`entity`] - [`StoreEntity`](crate::framework::StoreEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - factory that creates the actor and its store handle

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::StoreActor;
use crate::model::Product;
use crate::stores::ProductStore;

/// Creates a new product store actor and its handle.
pub fn new() -> (StoreActor<Product>, ProductStore) {
    let (actor, client) = StoreActor::new(32);
    (actor, ProductStore::new(client))
}
