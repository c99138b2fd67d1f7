//! Products

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::pricing::as_major_units;

/// Catalog product reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap a catalog identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Product details captured when a product is put in the cart.
///
/// The snapshot is never refreshed from the catalog: a later catalog price change is not seen by an
/// existing cart line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    /// Catalog product reference.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price in minor units, stored as a major-unit number.
    #[serde(with = "as_major_units")]
    pub price: i64,

    /// Pre-discount price in minor units, when the product is on sale.
    #[serde(
        default,
        with = "as_major_units::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<i64>,

    /// Featured image location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,

    /// URL slug of the product page.
    pub slug: String,

    /// Whether the product could be ordered when captured.
    pub in_stock: bool,
}

impl ProductSnapshot {
    /// Amount saved against the original price, if the product is discounted.
    pub fn savings(&self) -> Option<i64> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original - self.price)
    }
}
