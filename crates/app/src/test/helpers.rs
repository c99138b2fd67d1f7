//! Test Helpers

use storefront::products::ProductSnapshot;

use crate::domain::products::{MockProductsGateway, ProductsGatewayError};

/// A products gateway serving the given snapshots and `NotFound` for anything else.
pub(crate) fn catalog(products: Vec<ProductSnapshot>) -> MockProductsGateway {
    let mut gateway = MockProductsGateway::new();

    gateway.expect_get_product().returning(move |id| {
        products
            .iter()
            .find(|product| &product.id == id)
            .cloned()
            .ok_or_else(|| ProductsGatewayError::NotFound(id.clone()))
    });

    gateway
}
