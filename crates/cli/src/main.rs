//! Storefront command-line client

use std::{error::Error, io::Write, process::ExitCode, sync::Arc};

use storefront_app::{context::StorefrontContext, notices::NoticeLog};
use tracing::debug;

use crate::config::CliConfig;

mod commands;
mod config;
mod observability;
mod output;
#[cfg(test)]
mod test_helpers;

/// Storefront command-line entry point
#[tokio::main]
pub async fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = CliConfig::load().unwrap_or_else(|error| error.exit());

    let mut stderr = std::io::stderr();

    if let Err(error) = observability::init_subscriber(&config.logging) {
        _ = writeln!(stderr, "Logging error: {error}");

        return ExitCode::FAILURE;
    }

    let notices = Arc::new(NoticeLog::new());

    let ctx = match StorefrontContext::new(
        config.api.to_api_config(),
        config.storage.location(),
        notices.clone(),
    ) {
        Ok(ctx) => ctx,
        Err(error) => {
            report(&mut stderr, &error);

            return ExitCode::FAILURE;
        }
    };

    debug!(api_url = %config.api.api_url, "storefront client ready");

    let result = config.command.run(&ctx, &mut std::io::stdout().lock()).await;

    _ = output::write_notices(&mut stderr, &notices.drain());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(&mut stderr, &error);

            ExitCode::FAILURE
        }
    }
}

fn report(out: &mut impl Write, error: &dyn Error) {
    _ = writeln!(out, "error: {error}");

    let mut source = error.source();

    while let Some(cause) = source {
        _ = writeln!(out, "  caused by: {cause}");
        source = cause.source();
    }
}
