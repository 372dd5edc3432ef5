//! # Menu Store Actor
//!
//! The heart of the subsystem: the menu store actor is where a candidate
//! menu is validated against the other stores and, only if every rule
//! holds, persisted together with its line items.
//!
//! ## Overview
//!
//! Unlike the other stores, this actor has dependencies: its creation hook
//! resolves the menu group and every referenced product before the menu is
//! inserted. The dependencies arrive as a [`MenuContext`] when the actor is
//! started (late binding, so the wiring stays free of circular references).
//!
//! Because the actor processes one save at a time, a creation's writes (the
//! line item records plus the menu itself) never interleave with another
//! creation's writes, and a rejected menu leaves the store untouched.
//!
//! - [`entity`] - [`StoreEntity`](crate::framework::StoreEntity) implementation for [`Menu`](crate::model::Menu), including the creation rules
//! - [`error`] - [`MenuError`] with the `InvalidArgument` validation kind
//! - [`new()`] - factory that creates the actor and the [`MenuService`]

pub mod entity;
pub mod error;

pub use entity::MenuContext;
pub use error::*;

use crate::framework::StoreActor;
use crate::model::Menu;
use crate::stores::MenuService;

/// Creates a new menu store actor and the service handle over it.
pub fn new() -> (StoreActor<Menu>, MenuService) {
    let (actor, client) = StoreActor::new(32);
    (actor, MenuService::new(client))
}
