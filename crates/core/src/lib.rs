//! Storefront
//!
//! Storefront is the cart, pricing and checkout core of a small watch shop: line-item bookkeeping,
//! display-currency handling, order totals and checkout form validation.

pub mod cart;
pub mod checkout;
pub mod currency;
pub mod fixtures;
pub mod pricing;
pub mod products;
pub mod totals;

pub mod prelude;
