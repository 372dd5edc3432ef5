//! # Menu Subsystem
//!
//! The menu-creation core of a restaurant point-of-sale system: validates
//! and persists menus - a name, a price, a menu-group association and a
//! non-empty list of (product, quantity) line items - with the price bound
//! that a menu may never cost more than the sum of its parts.
//!
//! ## Design
//!
//! Every store is an actor: a Tokio task that exclusively owns the records
//! of one entity type and processes requests sequentially. That gives the
//! subsystem stable snapshots, read-your-writes within a creation call and
//! atomic multi-record writes without any locking. Monetary amounts are
//! `rust_decimal::Decimal` end to end, so the price-sum comparison is exact.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`StoreActor`](framework::StoreActor) and the
//! [`StoreEntity`](framework::StoreEntity) contract. Domain-agnostic; knows
//! nothing about menus.
//!
//! ### 2. The Data ([`model`])
//! Pure domain structures: [`MenuGroup`](model::MenuGroup),
//! [`Product`](model::Product), [`Menu`](model::Menu) and its owned line
//! items.
//!
//! ### 3. The Rules ([`menu_actor`], [`product_actor`], [`menu_group_actor`], [`menu_product_actor`])
//! `StoreEntity` implementations per entity. The menu creation rules -
//! fail-fast, first violated rule wins - live in the menu actor's creation
//! hook, which resolves the menu group and products through its injected
//! context.
//!
//! ### 4. The Interface ([`stores`])
//! Domain store handles wrapping the generic client:
//! [`MenuService`](stores::MenuService) is the create/list surface the
//! consuming boundary uses.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`MenuSystem`](lifecycle::MenuSystem) spins up the four actors, wires
//! the menu actor's dependencies and shuts everything down gracefully.
//!
//! ## Quick Start
//!
//! ```rust
//! use pos_menu::lifecycle::MenuSystem;
//! use pos_menu::model::{MenuCreate, MenuGroupCreate, MenuProduct, ProductCreate};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = MenuSystem::new();
//!
//!     let group = system
//!         .menu_groups
//!         .save(MenuGroupCreate { name: "Two Chickens".into() })
//!         .await?;
//!     let product = system
//!         .products
//!         .save(ProductCreate { name: "Fried Chicken".into(), price: Decimal::from(16000) })
//!         .await?;
//!
//!     let menu = system
//!         .menus
//!         .create(MenuCreate {
//!             name: "Two Fried Chickens".into(),
//!             price: Some(Decimal::from(30000)),
//!             menu_group_id: Some(group.id),
//!             menu_products: vec![MenuProduct { product_id: product.id, quantity: 2 }],
//!         })
//!         .await?;
//!
//!     assert_eq!(menu.menu_products.len(), 1);
//!     system.shutdown().await.map_err(std::io::Error::other)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Testing
//!
//! See [`framework::mock`] for testing store handles without spawning
//! actors, and the `tests/` directory for the full scenario suite.

pub mod framework;
pub mod lifecycle;
pub mod menu_actor;
pub mod menu_group_actor;
pub mod menu_product_actor;
pub mod model;
pub mod product_actor;
pub mod stores;
