//! API Config

use clap::Args;
use storefront_app::api::ApiConfig;

/// Storefront backend settings.
#[derive(Debug, Args)]
pub(crate) struct ApiSettings {
    /// Base URL of the storefront backend
    #[arg(long, env = "STOREFRONT_API_URL", default_value = "http://localhost:3000")]
    pub api_url: String,
}

impl ApiSettings {
    pub fn to_api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_url.clone(),
        }
    }
}
