//! Payments

pub mod errors;
pub mod models;
pub mod service;

pub use errors::PaymentError;
pub use models::PaymentOutcome;
pub use service::*;
