//! Orders

pub mod errors;
pub mod models;
pub mod service;

pub use errors::OrdersGatewayError;
pub use models::PaymentHandle;
pub use service::*;
