//! # Menu Product Store
//!
//! High-level handle for the menu line item store actor. Writes come
//! exclusively from the menu actor's creation hook.

use crate::framework::{EntityStore, StoreClient, StoreError};
use crate::menu_product_actor::MenuProductError;
use crate::model::{MenuProductCreate, MenuProductRecord};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Handle to the menu product store.
#[derive(Clone)]
pub struct MenuProductStore {
    inner: StoreClient<MenuProductRecord>,
}

impl MenuProductStore {
    pub fn new(inner: StoreClient<MenuProductRecord>) -> Self {
        Self { inner }
    }

    /// Persist one line item; returns the stored record with its seq.
    #[instrument(skip(self))]
    pub async fn save(
        &self,
        params: MenuProductCreate,
    ) -> Result<MenuProductRecord, MenuProductError> {
        debug!("Sending request");
        self.inner
            .save(params)
            .await
            .map_err(|e| MenuProductError::ActorCommunicationError(e.to_string()))
    }
}

#[async_trait]
impl EntityStore<MenuProductRecord> for MenuProductStore {
    type Error = MenuProductError;

    fn inner(&self) -> &StoreClient<MenuProductRecord> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        MenuProductError::ActorCommunicationError(e.to_string())
    }
}
