//! # Menu Group Store Actor
//!
//! The simplest store in the system: menu groups carry no invariants of
//! their own, so this is a pure storage abstraction with no dependencies
//! (`Context = ()`) and no creation hook.
//!
//! - [`entity`] - [`StoreEntity`](crate::framework::StoreEntity) implementation for [`MenuGroup`]
//! - [`error`] - [`MenuGroupError`] type for type-safe error handling
//! - [`new()`] - factory that creates the actor and its store handle

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::StoreActor;
use crate::model::MenuGroup;
use crate::stores::MenuGroupStore;

/// Creates a new menu group store actor and its handle.
pub fn new() -> (StoreActor<MenuGroup>, MenuGroupStore) {
    let (actor, client) = StoreActor::new(32);
    (actor, MenuGroupStore::new(client))
}
