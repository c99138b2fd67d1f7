//! Checkout session errors.

use storefront::checkout::FormError;
use thiserror::Error;

use crate::domain::{orders::OrdersGatewayError, payments::PaymentError};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("a submission is already in progress")]
    SubmissionInFlight,

    #[error("checkout is already complete")]
    AlreadyCompleted,

    #[error("failed to create order")]
    Order(#[from] OrdersGatewayError),

    #[error(transparent)]
    Payment(#[from] PaymentError),
}

impl From<FormError> for CheckoutError {
    fn from(error: FormError) -> Self {
        match error {
            FormError::SubmissionInFlight => Self::SubmissionInFlight,
            FormError::AlreadyCompleted => Self::AlreadyCompleted,
        }
    }
}
