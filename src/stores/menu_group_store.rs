//! # Menu Group Store
//!
//! High-level handle for the menu group store actor.

use crate::framework::{EntityStore, StoreClient, StoreError};
use crate::menu_group_actor::MenuGroupError;
use crate::model::{MenuGroup, MenuGroupCreate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Handle to the menu group store.
#[derive(Clone)]
pub struct MenuGroupStore {
    inner: StoreClient<MenuGroup>,
}

impl MenuGroupStore {
    pub fn new(inner: StoreClient<MenuGroup>) -> Self {
        Self { inner }
    }

    /// Persist a new menu group; returns the stored group with its id.
    #[instrument(skip(self))]
    pub async fn save(&self, params: MenuGroupCreate) -> Result<MenuGroup, MenuGroupError> {
        debug!("Sending request");
        self.inner
            .save(params)
            .await
            .map_err(|e| MenuGroupError::ActorCommunicationError(e.to_string()))
    }
}

#[async_trait]
impl EntityStore<MenuGroup> for MenuGroupStore {
    type Error = MenuGroupError;

    fn inner(&self) -> &StoreClient<MenuGroup> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        MenuGroupError::ActorCommunicationError(e.to_string())
    }
}
