//! Order Requests

use serde::{Deserialize, Serialize};

use crate::checkout::address::Address;

/// Payload sent to the backend to create an order and its payment intent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Contact email
    pub customer_email: String,

    /// Contact name
    pub customer_name: String,

    /// Contact phone, omitted when not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,

    /// Where the order ships to
    pub shipping_address: Address,

    /// Billing address; a copy of the shipping address when they are the same
    pub billing_address: Address,
}
