//! Payment processor.

use async_trait::async_trait;
use mockall::automock;
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    api::{ApiClient, check_status},
    domain::payments::{errors::PaymentError, models::PaymentOutcome},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfirmPaymentRequest<'a> {
    client_secret: &'a str,
}

#[derive(Debug, Clone)]
pub struct HttpPaymentProcessor {
    client: ApiClient,
}

impl HttpPaymentProcessor {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentProcessor for HttpPaymentProcessor {
    async fn confirm_payment(&self, client_secret: &str) -> Result<PaymentOutcome, PaymentError> {
        let response = self
            .client
            .http()
            .post(self.client.url("/api/payments/confirm"))
            .json(&ConfirmPaymentRequest { client_secret })
            .send()
            .await?;

        let response = check_status(response).await.inspect_err(|error| {
            warn!(%error, "payment confirmation rejected");
        })?;

        let outcome: PaymentOutcome = response.json().await?;

        info!(payment_id = %outcome.id, status = %outcome.status, "payment confirmed");

        Ok(outcome)
    }
}

#[automock]
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Confirm the payment intent identified by its client secret.
    async fn confirm_payment(&self, client_secret: &str) -> Result<PaymentOutcome, PaymentError>;
}
