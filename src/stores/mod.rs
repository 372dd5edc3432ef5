//! Domain-specific store handles.
//!
//! Raw message passing never leaks out of the framework: the rest of the
//! application talks to these wrappers, which pin down the entity type, the
//! error type and the domain-level operation names.

pub mod menu_group_store;
pub mod menu_product_store;
pub mod menu_service;
pub mod product_store;

pub use menu_group_store::MenuGroupStore;
pub use menu_product_store::MenuProductStore;
pub use menu_service::MenuService;
pub use product_store::ProductStore;
