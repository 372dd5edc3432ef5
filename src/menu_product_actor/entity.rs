//! StoreEntity implementation for persisted menu line items.

use crate::framework::StoreEntity;
use crate::menu_product_actor::MenuProductError;
use crate::model::{MenuProductCreate, MenuProductRecord, MenuProductSeq};

impl StoreEntity for MenuProductRecord {
    type Id = MenuProductSeq;
    type Create = MenuProductCreate;
    type Context = ();
    type Error = MenuProductError;

    fn from_create_params(
        seq: MenuProductSeq,
        params: MenuProductCreate,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            seq,
            menu_id: params.menu_id,
            product_id: params.product_id,
            quantity: params.quantity,
        })
    }
}
