//! # Menu Service
//!
//! The creation/list surface of the subsystem: a high-level handle over the
//! menu store actor. The creation rules themselves run inside the actor
//! (see [`crate::menu_actor::entity`]); this wrapper contributes the typed
//! error mapping, so callers can distinguish a validation rejection from a
//! store failure.

use crate::framework::{EntityStore, StoreClient, StoreError};
use crate::menu_actor::MenuError;
use crate::model::{Menu, MenuCreate};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Handle to the menu store, exposing menu creation and listing.
#[derive(Clone)]
pub struct MenuService {
    inner: StoreClient<Menu>,
}

impl MenuService {
    pub fn new(inner: StoreClient<Menu>) -> Self {
        Self { inner }
    }

    /// Validate and persist a new menu.
    ///
    /// On success the returned [`Menu`] carries the store-assigned id and
    /// the order-preserved line items. On a rule violation the error is
    /// [`MenuError::InvalidArgument`] naming the offending field, and no
    /// store write has happened.
    #[instrument(skip(self, params))]
    pub async fn create(&self, params: MenuCreate) -> Result<Menu, MenuError> {
        debug!(?params, "create called");
        info!("Sending menu creation to store");
        self.inner.save(params).await.map_err(map_store_error)
    }

    /// Every persisted menu, each with its populated line item list.
    /// No ordering is guaranteed.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Menu>, MenuError> {
        debug!("Sending request");
        self.inner.find_all().await.map_err(map_store_error)
    }
}

#[async_trait]
impl EntityStore<Menu> for MenuService {
    type Error = MenuError;

    fn inner(&self) -> &StoreClient<Menu> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        map_store_error(e)
    }
}

/// Recover the typed `MenuError` a creation was rejected with; anything
/// else is a store-layer failure and stays distinguishable from a
/// validation error.
fn map_store_error(e: StoreError) -> MenuError {
    match e {
        StoreError::EntityError(inner) => match inner.downcast::<MenuError>() {
            Ok(err) => *err,
            Err(other) => MenuError::ActorCommunicationError(other.to_string()),
        },
        other => MenuError::ActorCommunicationError(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_store, expect_find_all, expect_save};
    use crate::model::{MenuGroupId, MenuId, MenuProduct, ProductId};
    use rust_decimal::Decimal;

    fn sample_menu() -> Menu {
        Menu {
            id: MenuId(1),
            name: "Two Fried Chickens".to_string(),
            price: Decimal::from(30000),
            menu_group_id: MenuGroupId(1),
            menu_products: vec![MenuProduct {
                product_id: ProductId(1),
                quantity: 2,
            }],
        }
    }

    fn sample_params() -> MenuCreate {
        MenuCreate {
            name: "Two Fried Chickens".to_string(),
            price: Some(Decimal::from(30000)),
            menu_group_id: Some(MenuGroupId(1)),
            menu_products: vec![MenuProduct {
                product_id: ProductId(1),
                quantity: 2,
            }],
        }
    }

    #[tokio::test]
    async fn create_returns_the_stored_menu() {
        let (client, mut receiver) = create_mock_store::<Menu>(10);
        let service = MenuService::new(client);

        let create_task = tokio::spawn(async move { service.create(sample_params()).await });

        let (params, responder) = expect_save(&mut receiver)
            .await
            .expect("Expected Save request");
        assert_eq!(params.name, "Two Fried Chickens");
        responder.send(Ok(sample_menu())).unwrap();

        let menu = create_task.await.unwrap().unwrap();
        assert_eq!(menu.id, MenuId(1));
        assert_eq!(menu.menu_products.len(), 1);
    }

    #[tokio::test]
    async fn create_recovers_the_typed_validation_error() {
        let (client, mut receiver) = create_mock_store::<Menu>(10);
        let service = MenuService::new(client);

        let create_task = tokio::spawn(async move { service.create(sample_params()).await });

        let (_, responder) = expect_save(&mut receiver)
            .await
            .expect("Expected Save request");
        responder
            .send(Err(StoreError::EntityError(Box::new(
                MenuError::invalid_argument("price", "menu price is required"),
            ))))
            .unwrap();

        let err = create_task.await.unwrap().unwrap_err();
        assert_eq!(
            err,
            MenuError::invalid_argument("price", "menu price is required")
        );
    }

    #[tokio::test]
    async fn foreign_entity_errors_stay_store_failures() {
        let (client, mut receiver) = create_mock_store::<Menu>(10);
        let service = MenuService::new(client);

        let create_task = tokio::spawn(async move { service.create(sample_params()).await });

        let (_, responder) = expect_save(&mut receiver)
            .await
            .expect("Expected Save request");
        responder
            .send(Err(StoreError::EntityError(Box::new(
                std::io::Error::other("disk full"),
            ))))
            .unwrap();

        let err = create_task.await.unwrap().unwrap_err();
        match err {
            MenuError::ActorCommunicationError(msg) => assert!(msg.contains("disk full")),
            other => panic!("Expected ActorCommunicationError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn list_passes_the_snapshot_through() {
        let (client, mut receiver) = create_mock_store::<Menu>(10);
        let service = MenuService::new(client);

        let list_task = tokio::spawn(async move { service.list().await });

        let responder = expect_find_all(&mut receiver)
            .await
            .expect("Expected FindAll request");
        responder.send(Ok(vec![sample_menu()])).unwrap();

        let menus = list_task.await.unwrap().unwrap();
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].name, "Two Fried Chickens");
    }
}
