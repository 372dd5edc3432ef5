//! StoreEntity implementation for the Menu domain type.
//!
//! The creation rules live here, split across the two lifecycle points the
//! framework offers. The rule order is part of the contract - the first
//! violated rule determines the error the caller sees:
//!
//! 1. price present            - `from_create_params`
//! 2. price not negative       - `from_create_params`
//! 3. menu group present       - `from_create_params`
//!    and resolvable           - `on_create`
//! 4. at least one line item   - `on_create`
//! 5. every product resolvable - `on_create`
//! 6. price ≤ Σ(price × qty)   - `on_create`, exact `Decimal` arithmetic
//!
//! Only after all rules pass does `on_create` persist the line item records;
//! the menu itself is inserted by the actor when the hook returns Ok.

use crate::framework::{EntityStore, StoreEntity};
use crate::menu_actor::MenuError;
use crate::model::{Menu, MenuCreate, MenuId, MenuProductCreate};
use crate::stores::{MenuGroupStore, MenuProductStore, ProductStore};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Dependencies injected into the menu store actor at startup.
#[derive(Clone)]
pub struct MenuContext {
    pub menu_groups: MenuGroupStore,
    pub products: ProductStore,
    pub menu_products: MenuProductStore,
}

#[async_trait]
impl StoreEntity for Menu {
    type Id = MenuId;
    type Create = MenuCreate;
    type Context = MenuContext;
    type Error = MenuError;

    /// Structural validation: everything that can be checked without
    /// consulting another store.
    fn from_create_params(id: MenuId, params: MenuCreate) -> Result<Self, MenuError> {
        let price = params
            .price
            .ok_or_else(|| MenuError::invalid_argument("price", "menu price is required"))?;
        if price < Decimal::ZERO {
            return Err(MenuError::invalid_argument(
                "price",
                format!("menu price must not be negative, got {}", price),
            ));
        }
        let menu_group_id = params.menu_group_id.ok_or_else(|| {
            MenuError::invalid_argument("menu_group_id", "a menu must belong to a menu group")
        })?;

        Ok(Self {
            id,
            name: params.name,
            price,
            menu_group_id,
            menu_products: params.menu_products,
        })
    }

    /// Referential validation and the price bound, then persistence of the
    /// line items. No store write happens before the last rule has passed.
    async fn on_create(&mut self, ctx: &MenuContext) -> Result<(), MenuError> {
        let group = ctx
            .menu_groups
            .find_by_id(self.menu_group_id)
            .await
            .map_err(|e| MenuError::ActorCommunicationError(e.to_string()))?;
        if group.is_none() {
            return Err(MenuError::invalid_argument(
                "menu_group_id",
                format!("menu group {} does not exist", self.menu_group_id),
            ));
        }

        if self.menu_products.is_empty() {
            return Err(MenuError::invalid_argument(
                "menu_products",
                "a menu needs at least one menu product",
            ));
        }

        // Price snapshot: the prices summed here are the ones in effect for
        // this creation; later product price changes do not concern us.
        let mut sum = Decimal::ZERO;
        for line in &self.menu_products {
            let product = ctx
                .products
                .find_by_id(line.product_id)
                .await
                .map_err(|e| MenuError::ActorCommunicationError(e.to_string()))?
                .ok_or_else(|| {
                    MenuError::invalid_argument(
                        "menu_products",
                        format!("product {} does not exist", line.product_id),
                    )
                })?;
            sum += product.price * Decimal::from(line.quantity);
        }

        if self.price > sum {
            return Err(MenuError::invalid_argument(
                "price",
                format!(
                    "menu price {} exceeds the sum of its menu products {}",
                    self.price, sum
                ),
            ));
        }

        for line in &self.menu_products {
            ctx.menu_products
                .save(MenuProductCreate {
                    menu_id: self.id,
                    product_id: line.product_id,
                    quantity: line.quantity,
                })
                .await
                .map_err(|e| MenuError::ActorCommunicationError(e.to_string()))?;
        }

        Ok(())
    }
}
