//! StoreEntity implementation for the Product domain type.

use crate::framework::StoreEntity;
use crate::model::{Product, ProductCreate, ProductId};
use crate::product_actor::ProductError;
use rust_decimal::Decimal;

impl StoreEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Context = ();
    type Error = ProductError;

    /// A product must never carry a negative unit price: menu validation
    /// sums these prices, and a negative addend would let an overpriced
    /// menu slip through the price bound.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.price < Decimal::ZERO {
            return Err(ProductError::InvalidPrice(format!(
                "product price must not be negative, got {}",
                params.price
            )));
        }
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
        })
    }
}
