//! Cart Line Items

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::NonZeroU32,
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::products::{ProductId, ProductSnapshot};

/// Line item identifier, generated when a product first enters the cart.
///
/// Stored ids are opaque strings; new ones are time-ordered UUIDs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(String);

impl LineItemId {
    /// Generate a fresh, time-ordered identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LineItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Default for LineItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for LineItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// One product in the cart together with its quantity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Line identifier.
    pub id: LineItemId,

    /// Catalog product this line refers to.
    pub product_id: ProductId,

    /// Number of units; never zero.
    pub quantity: NonZeroU32,

    /// Product details as they were when the line was created.
    pub product: ProductSnapshot,

    /// When the snapshot was captured. Lines saved without one read as captured now.
    #[serde(default = "Timestamp::now")]
    pub added_at: Timestamp,
}

impl CartLineItem {
    /// Start a new line with a single unit of the given product.
    pub fn new(product: ProductSnapshot, added_at: Timestamp) -> Self {
        Self {
            id: LineItemId::new(),
            product_id: product.id.clone(),
            quantity: NonZeroU32::MIN,
            product,
            added_at,
        }
    }

    /// Unit price multiplied by quantity, in minor units.
    pub fn line_total(&self) -> i64 {
        self.product
            .price
            .saturating_mul(i64::from(self.quantity.get()))
    }
}
