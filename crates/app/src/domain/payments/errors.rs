//! Payment processor errors.

use thiserror::Error;

use crate::api::ApiError;

/// A failed payment confirmation, carrying one customer-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PaymentError {
    message: String,
    #[source]
    source: Option<ApiError>,
}

impl PaymentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ApiError> for PaymentError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Status { message, .. } => Self::new(message),
            ApiError::Http(_) | ApiError::InvalidUrl(_) => Self {
                message: "An unexpected error occurred.".to_string(),
                source: Some(error),
            },
        }
    }
}

impl From<reqwest::Error> for PaymentError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Http(error).into()
    }
}
