//! Storage Config

use std::path::PathBuf;

use clap::Args;
use storefront_app::context::StorageLocation;

/// Client-local storage settings.
#[derive(Debug, Args)]
pub(crate) struct StorageConfig {
    /// Directory holding the saved cart and currency preference
    #[arg(long, env = "STOREFRONT_STORAGE_DIR", default_value = ".storefront")]
    pub storage_dir: PathBuf,

    /// Keep state in memory only for this invocation
    #[arg(long, default_value_t = false)]
    pub ephemeral: bool,
}

impl StorageConfig {
    pub fn location(&self) -> StorageLocation {
        if self.ephemeral {
            StorageLocation::Memory
        } else {
            StorageLocation::Directory(self.storage_dir.clone())
        }
    }
}
