//! Storefront application services: persisted stores, backend gateways and the checkout session.

pub mod api;
pub mod context;
pub mod domain;
pub mod notices;
pub mod storage;

#[cfg(test)]
mod test;
