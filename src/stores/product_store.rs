//! # Product Store
//!
//! High-level handle for the product store actor. Menu creation uses it
//! strictly for read access to prices; saving products belongs to the
//! surrounding product management, which this subsystem only depends on.

use crate::framework::{EntityStore, StoreClient, StoreError};
use crate::model::{Product, ProductCreate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Handle to the product store.
#[derive(Clone)]
pub struct ProductStore {
    inner: StoreClient<Product>,
}

impl ProductStore {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }

    /// Persist a new product; returns the stored product with its id.
    #[instrument(skip(self))]
    pub async fn save(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.save(params).await.map_err(map_store_error)
    }
}

#[async_trait]
impl EntityStore<Product> for ProductStore {
    type Error = ProductError;

    fn inner(&self) -> &StoreClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        map_store_error(e)
    }
}

/// Recover the typed `ProductError` a save was rejected with; anything else
/// is a store-layer failure.
fn map_store_error(e: StoreError) -> ProductError {
    match e {
        StoreError::EntityError(inner) => match inner.downcast::<ProductError>() {
            Ok(err) => *err,
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        },
        other => ProductError::ActorCommunicationError(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product_actor;
    use rust_decimal::Decimal;

    fn running_store() -> ProductStore {
        let (actor, store) = product_actor::new();
        tokio::spawn(actor.run(()));
        store
    }

    #[tokio::test]
    async fn save_returns_the_stored_product() {
        let store = running_store();

        let product = store
            .save(ProductCreate {
                name: "Fried Chicken".to_string(),
                price: Decimal::from(16000),
            })
            .await
            .unwrap();

        assert_eq!(product.name, "Fried Chicken");
        assert_eq!(product.price, Decimal::from(16000));
        assert_eq!(store.find_by_id(product.id).await.unwrap(), Some(product));
    }

    #[tokio::test]
    async fn a_negative_price_is_rejected_as_a_typed_error() {
        let store = running_store();

        let err = store
            .save(ProductCreate {
                name: "Refund Chicken".to_string(),
                price: Decimal::from(-16000),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::InvalidPrice(_)));
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
