//! Storefront Domain Concerns

pub mod carts;
pub mod checkout;
pub mod currency;
pub mod orders;
pub mod payments;
pub mod products;
