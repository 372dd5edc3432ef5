//! Menus: sellable bundles of products with their own price.
//!
//! A [`Menu`] exclusively owns its [`MenuProduct`] line items (plain
//! composition - a line item never outlives its menu and is never shared
//! across menus). The menu group and the products are referenced by id only;
//! the aggregate never embeds a live handle to either.

use crate::model::{MenuGroupId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuId(pub u32);

impl From<u32> for MenuId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_{}", self.0)
    }
}

/// One (product, quantity) line item within a menu.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MenuProduct {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A sellable bundle of products, belonging to one menu group.
///
/// Invariants, established at creation and never re-validated (there is no
/// update path):
/// - `price` is non-negative,
/// - `menu_group_id` resolved to an existing group at creation time,
/// - `menu_products` is non-empty and every product resolved,
/// - `price` does not exceed the sum of line totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
    pub price: Decimal,
    pub menu_group_id: MenuGroupId,
    pub menu_products: Vec<MenuProduct>,
}

/// Payload for creating a new menu.
///
/// `price` and `menu_group_id` are optional on purpose: the creation rules
/// distinguish "absent" from "invalid", and both must be rejected with the
/// right message. The identifier is store-assigned and therefore not part of
/// the payload.
#[derive(Debug, Clone)]
pub struct MenuCreate {
    pub name: String,
    pub price: Option<Decimal>,
    pub menu_group_id: Option<MenuGroupId>,
    pub menu_products: Vec<MenuProduct>,
}

/// Sequence identifier for persisted menu line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuProductSeq(pub u32);

impl From<u32> for MenuProductSeq {
    fn from(seq: u32) -> Self {
        Self(seq)
    }
}

impl Display for MenuProductSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_product_{}", self.0)
    }
}

/// The persisted form of a line item, linked back to its owning menu.
///
/// Records are written together with their menu and share its lifecycle;
/// the store keys them by `seq` only because rows need *some* key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuProductRecord {
    pub seq: MenuProductSeq,
    pub menu_id: MenuId,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Payload for persisting one line item of a menu.
#[derive(Debug, Clone)]
pub struct MenuProductCreate {
    pub menu_id: MenuId,
    pub product_id: ProductId,
    pub quantity: u32,
}
