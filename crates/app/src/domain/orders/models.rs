//! Orders models.

use serde::{Deserialize, Serialize};

/// Created order and the payment intent secret needed to confirm it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHandle {
    pub order_id: String,
    pub order_number: String,
    pub client_secret: String,
}
