//! # Menu Product Store Actor
//!
//! Stores the persisted line items of menus. Records are only ever written
//! by the menu actor's creation hook, one batch per menu; the store itself
//! performs no validation (`Context = ()`).
//!
//! - [`entity`] - [`StoreEntity`](crate::framework::StoreEntity) implementation for [`MenuProductRecord`]
//! - [`error`] - [`MenuProductError`] type for type-safe error handling
//! - [`new()`] - factory that creates the actor and its store handle

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::StoreActor;
use crate::model::MenuProductRecord;
use crate::stores::MenuProductStore;

/// Creates a new menu product store actor and its handle.
pub fn new() -> (StoreActor<MenuProductRecord>, MenuProductStore) {
    let (actor, client) = StoreActor::new(32);
    (actor, MenuProductStore::new(client))
}
