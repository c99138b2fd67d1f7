//! Cart store errors.

use storefront::{cart::CartError, products::ProductId};
use thiserror::Error;

use crate::domain::products::ProductsGatewayError;

#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("product {0} is out of stock")]
    OutOfStock(ProductId),

    #[error("failed to fetch product")]
    Product(#[from] ProductsGatewayError),

    #[error(transparent)]
    Cart(CartError),
}

impl From<CartError> for CartStoreError {
    fn from(error: CartError) -> Self {
        match error {
            CartError::OutOfStock(id) => Self::OutOfStock(id),
            other => Self::Cart(other),
        }
    }
}
