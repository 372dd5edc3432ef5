//! Menu groups: the named categories menus belong to.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuGroupId(pub u32);

impl From<u32> for MenuGroupId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuGroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_group_{}", self.0)
    }
}

/// A named category a menu belongs to. Immutable once created; menus hold
/// its id as a plain lookup key, never the group itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub id: MenuGroupId,
    pub name: String,
}

/// Payload for creating a new menu group.
#[derive(Debug, Clone)]
pub struct MenuGroupCreate {
    pub name: String,
}
