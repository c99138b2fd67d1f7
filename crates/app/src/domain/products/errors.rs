//! Products gateway errors.

use storefront::{pricing::PriceError, products::ProductId};
use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum ProductsGatewayError {
    #[error("product {0} not found")]
    NotFound(ProductId),

    #[error("product request failed")]
    Request(#[source] ApiError),

    #[error("invalid product price")]
    InvalidPrice(#[from] PriceError),
}

impl From<reqwest::Error> for ProductsGatewayError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(ApiError::Http(error))
    }
}
