//! Products gateway.

use async_trait::async_trait;
use mockall::automock;
use storefront::products::{ProductId, ProductSnapshot};
use tracing::debug;

use crate::{
    api::ApiClient,
    domain::products::{errors::ProductsGatewayError, records::ProductRecord},
};

#[derive(Debug, Clone)]
pub struct HttpProductsGateway {
    client: ApiClient,
}

impl HttpProductsGateway {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductsGateway for HttpProductsGateway {
    async fn get_product(&self, id: &ProductId) -> Result<ProductSnapshot, ProductsGatewayError> {
        let url = self
            .client
            .resource_url("/api/products", id.as_str())
            .map_err(ProductsGatewayError::Request)?;

        let response = self.client.http().get(url).send().await?;

        if !response.status().is_success() {
            debug!(product_id = %id, status = response.status().as_u16(), "product lookup failed");

            return Err(ProductsGatewayError::NotFound(id.clone()));
        }

        let record: ProductRecord = response.json().await?;

        ProductSnapshot::try_from(record)
    }
}

#[automock]
#[async_trait]
pub trait ProductsGateway: Send + Sync {
    /// Fetch the current details of a product.
    async fn get_product(&self, id: &ProductId) -> Result<ProductSnapshot, ProductsGatewayError>;
}
