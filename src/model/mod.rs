//! Pure domain data structures implementing the
//! [`StoreEntity`](crate::framework::StoreEntity) trait.

pub mod menu;
pub mod menu_group;
pub mod product;

pub use menu::*;
pub use menu_group::*;
pub use product::*;
