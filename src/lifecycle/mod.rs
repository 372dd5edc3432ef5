//! # System Lifecycle & Orchestration
//!
//! Individual store actors are simple; wiring them together is where the
//! coordination lives. This module provides the conductor for the menu
//! subsystem:
//!
//! 1. **Actor creation** - instantiate the four store actors and handles
//! 2. **Dependency injection** - hand the menu actor its context at startup
//! 3. **Graceful shutdown** - drop handles, await every actor task
//! 4. **Observability setup** - [`setup_tracing`] for the consuming boundary
//!
//! ## Dependency Injection via Context
//!
//! Dependencies bind late: actors are constructed without them and receive
//! them through `run(context)`. The menu actor gets clones of the menu
//! group, product and menu product handles; the dependency graph is acyclic,
//! so dropping the [`MenuSystem`]'s own handles is enough to shut every
//! actor down in order.

pub mod menu_system;
pub mod tracing;

pub use menu_system::*;
pub use tracing::*;
