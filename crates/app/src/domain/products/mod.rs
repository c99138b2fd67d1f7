//! Products

pub mod errors;
pub mod records;
pub mod service;

pub use errors::ProductsGatewayError;
pub use service::*;
