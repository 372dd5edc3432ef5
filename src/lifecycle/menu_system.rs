//! The runtime orchestrator for the menu subsystem.

use crate::menu_actor::{self, MenuContext};
use crate::menu_group_actor;
use crate::menu_product_actor;
use crate::product_actor;
use crate::stores::{MenuGroupStore, MenuProductStore, MenuService, ProductStore};
use tracing::{error, info};

/// The fully wired menu subsystem.
///
/// Owns a handle to each store and the join handles of the actor tasks.
/// The consuming boundary (web layer, test harness, ...) talks exclusively
/// to the public handles.
///
/// # Example
///
/// ```ignore
/// let system = MenuSystem::new();
///
/// let group = system.menu_groups.save(group_params).await?;
/// let product = system.products.save(product_params).await?;
/// let menu = system.menus.create(menu_params).await?;
///
/// system.shutdown().await?;
/// ```
pub struct MenuSystem {
    /// Handle to the menu group store
    pub menu_groups: MenuGroupStore,

    /// Handle to the product store
    pub products: ProductStore,

    /// Handle to the menu line item store
    pub menu_products: MenuProductStore,

    /// Handle to the menu store (creation and listing)
    pub menus: MenuService,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl MenuSystem {
    /// Creates and starts the whole subsystem.
    ///
    /// The three dependency-free stores start with an empty context; the
    /// menu actor receives clones of their handles as its [`MenuContext`].
    pub fn new() -> Self {
        let (menu_group_actor, menu_groups) = menu_group_actor::new();
        let (product_actor, products) = product_actor::new();
        let (menu_product_actor, menu_products) = menu_product_actor::new();
        let (menu_actor, menus) = menu_actor::new();

        let menu_group_handle = tokio::spawn(menu_group_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let menu_product_handle = tokio::spawn(menu_product_actor.run(()));
        let menu_handle = tokio::spawn(menu_actor.run(MenuContext {
            menu_groups: menu_groups.clone(),
            products: products.clone(),
            menu_products: menu_products.clone(),
        }));

        Self {
            menu_groups,
            products,
            menu_products,
            menus,
            handles: vec![
                menu_group_handle,
                product_handle,
                menu_product_handle,
                menu_handle,
            ],
        }
    }

    /// Gracefully shuts down the subsystem.
    ///
    /// Dropping the handles closes the request channels; each actor drains
    /// its queue and exits. The menu actor holds the only surviving clones
    /// of the other handles, so it shuts down first and releases them.
    ///
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down menu subsystem...");

        drop(self.menus);
        drop(self.menu_groups);
        drop(self.products);
        drop(self.menu_products);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("Menu subsystem shutdown complete.");
        Ok(())
    }
}

impl Default for MenuSystem {
    fn default() -> Self {
        Self::new()
    }
}
