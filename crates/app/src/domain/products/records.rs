//! Products wire records.

use rust_decimal::Decimal;
use serde::Deserialize;
use storefront::{
    pricing::minor_units,
    products::{ProductId, ProductSnapshot},
};

use crate::domain::products::errors::ProductsGatewayError;

/// Product as returned by the catalog backend.
///
/// Prices arrive as either JSON strings or numbers.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub original_price: Option<Decimal>,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub slug: String,
    pub in_stock: bool,
}

impl TryFrom<ProductRecord> for ProductSnapshot {
    type Error = ProductsGatewayError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Ok(ProductSnapshot {
            id: ProductId::new(record.id),
            name: record.name,
            price: minor_units(record.price)?,
            original_price: record.original_price.map(minor_units).transpose()?,
            featured_image: record.featured_image,
            slug: record.slug,
            in_stock: record.in_stock,
        })
    }
}
