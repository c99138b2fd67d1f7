//! Command-line configuration

use clap::Parser;

use crate::{
    commands::Command,
    config::{api::ApiSettings, observability::LoggingConfig, storage::StorageConfig},
};

pub(crate) mod api;
pub(crate) mod observability;
pub(crate) mod storage;

/// Storefront command-line client configuration
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront command-line client", long_about = None)]
pub(crate) struct CliConfig {
    /// Storefront backend settings.
    #[command(flatten)]
    pub api: ApiSettings,

    /// Client-local storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
