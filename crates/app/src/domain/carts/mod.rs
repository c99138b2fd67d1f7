//! Carts

pub mod errors;
pub mod service;

pub use errors::CartStoreError;
pub use service::*;
