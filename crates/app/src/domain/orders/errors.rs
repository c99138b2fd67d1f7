//! Orders gateway errors.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum OrdersGatewayError {
    #[error("order was rejected: {message}")]
    Rejected { status: u16, message: String },

    #[error("order request failed")]
    Request(#[source] ApiError),
}

impl From<ApiError> for OrdersGatewayError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Status { status, message } => Self::Rejected { status, message },
            other @ (ApiError::Http(_) | ApiError::InvalidUrl(_)) => Self::Request(other),
        }
    }
}

impl From<reqwest::Error> for OrdersGatewayError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(ApiError::Http(error))
    }
}
