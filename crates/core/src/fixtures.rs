//! Fixtures
//!
//! Catalog data shared by tests across the workspace.

use crate::{
    checkout::{Address, Country},
    products::{ProductId, ProductSnapshot},
};

/// An in-stock product snapshot with the given id and unit price (minor units).
pub fn snapshot(id: &str, price: i64) -> ProductSnapshot {
    ProductSnapshot {
        id: ProductId::new(id),
        name: format!("Watch {id}"),
        price,
        original_price: None,
        featured_image: None,
        slug: id.to_string(),
        in_stock: true,
    }
}

/// An out-of-stock product snapshot.
pub fn sold_out(id: &str, price: i64) -> ProductSnapshot {
    ProductSnapshot {
        in_stock: false,
        ..snapshot(id, price)
    }
}

/// A complete UK shipping address.
pub fn uk_address() -> Address {
    Address {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        address_line1: "1 Clock Tower Lane".to_string(),
        city: "London".to_string(),
        postal_code: "EC1A 1BB".to_string(),
        ..Address::new(Country::GB)
    }
}
