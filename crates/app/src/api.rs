//! Storefront backend HTTP client.

use reqwest::{Client, Response, Url};
use serde::Deserialize;
use thiserror::Error;

/// Configuration for reaching the storefront backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the storefront backend, e.g. `"http://localhost:3000"`.
    pub base_url: String,
}

/// Shared HTTP client for the storefront backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Absolute URL for an API path such as `/api/orders`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Absolute URL for an API path followed by one percent-encoded segment, e.g. a product id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the base URL cannot be extended with path segments.
    pub fn resource_url(&self, path: &str, segment: &str) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&self.url(path)).map_err(|error| ApiError::InvalidUrl(error.to_string()))?;

        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(segment);

        Ok(url)
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &Client {
        &self.http
    }
}

/// Errors raised while talking to the storefront backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-2xx response.
    #[error("request failed with status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,

        /// Error message from the body, or the raw body
        message: String,
    },

    /// The configured base URL cannot address backend resources.
    #[error("invalid api url: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<ErrorDetail>,

    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Text(String),
    Object { message: String },
}

/// Extract the most specific error message from an error response body.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: Some(ErrorDetail::Text(message) | ErrorDetail::Object { message }),
            ..
        }) => message,
        Ok(ErrorBody {
            message: Some(message),
            ..
        }) => message,
        _ => body.to_string(),
    }
}

/// Turn a non-success response into [`ApiError::Status`].
pub(crate) async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();

    Err(ApiError::Status {
        status,
        message: error_message(&text),
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn resource_url_encodes_the_segment() -> TestResult {
        let client = ApiClient::new(ApiConfig {
            base_url: "http://localhost:3000/".to_string(),
        });

        assert_eq!(
            client.resource_url("/api/products", "watch-1")?.as_str(),
            "http://localhost:3000/api/products/watch-1"
        );
        assert_eq!(
            client.resource_url("/api/products", "a/b?c#d")?.as_str(),
            "http://localhost:3000/api/products/a%2Fb%3Fc%23d"
        );

        Ok(())
    }

    #[test]
    fn url_joins_without_double_slashes() {
        let client = ApiClient::new(ApiConfig {
            base_url: "http://localhost:3000/".to_string(),
        });

        assert_eq!(
            client.url("/api/products/watch-1"),
            "http://localhost:3000/api/products/watch-1"
        );
        assert_eq!(client.url("api/orders"), "http://localhost:3000/api/orders");
    }

    #[test]
    fn error_message_reads_nested_error_object() {
        assert_eq!(
            error_message(r#"{"error":{"message":"Your card was declined."}}"#),
            "Your card was declined."
        );
    }

    #[test]
    fn error_message_reads_flat_fields() {
        assert_eq!(error_message(r#"{"error":"Product not found"}"#), "Product not found");
        assert_eq!(error_message(r#"{"message":"Bad request"}"#), "Bad request");
    }

    #[test]
    fn error_message_falls_back_to_body() {
        assert_eq!(error_message("upstream timeout"), "upstream timeout");
    }
}
