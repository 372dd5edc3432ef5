//! StoreEntity implementation for the MenuGroup domain type.

use crate::framework::StoreEntity;
use crate::menu_group_actor::MenuGroupError;
use crate::model::{MenuGroup, MenuGroupCreate, MenuGroupId};

impl StoreEntity for MenuGroup {
    type Id = MenuGroupId;
    type Create = MenuGroupCreate;
    type Context = ();
    type Error = MenuGroupError;

    fn from_create_params(id: MenuGroupId, params: MenuGroupCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
        })
    }
}
