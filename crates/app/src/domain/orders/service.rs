//! Orders gateway.

use async_trait::async_trait;
use mockall::automock;
use storefront::checkout::OrderRequest;
use tracing::info;

use crate::{
    api::{ApiClient, check_status},
    domain::orders::{errors::OrdersGatewayError, models::PaymentHandle},
};

#[derive(Debug, Clone)]
pub struct HttpOrdersGateway {
    client: ApiClient,
}

impl HttpOrdersGateway {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrdersGateway for HttpOrdersGateway {
    async fn create_order(
        &self,
        request: &OrderRequest,
    ) -> Result<PaymentHandle, OrdersGatewayError> {
        let response = self
            .client
            .http()
            .post(self.client.url("/api/orders"))
            .json(request)
            .send()
            .await?;

        let handle: PaymentHandle = check_status(response).await?.json().await?;

        info!(
            order_id = %handle.order_id,
            order_number = %handle.order_number,
            "order created"
        );

        Ok(handle)
    }
}

#[automock]
#[async_trait]
pub trait OrdersGateway: Send + Sync {
    /// Create an order and its payment intent.
    async fn create_order(
        &self,
        request: &OrderRequest,
    ) -> Result<PaymentHandle, OrdersGatewayError>;
}
