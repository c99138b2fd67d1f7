//! Currency commands.

use std::io::Write;

use clap::{Args, Subcommand};
use storefront_app::{context::StorefrontContext, domain::currency::CurrencyService};

use crate::commands::CliError;

#[derive(Debug, Args)]
pub(crate) struct CurrencyCommand {
    #[command(subcommand)]
    command: CurrencySubcommand,
}

#[derive(Debug, Subcommand)]
enum CurrencySubcommand {
    /// Print the display currency
    Show,

    /// Change the display currency
    Set {
        /// ISO currency code, e.g. GBP or USD
        code: String,
    },
}

pub(crate) fn run(
    command: CurrencyCommand,
    ctx: &StorefrontContext,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let currency = match command.command {
        CurrencySubcommand::Show => ctx.currency.currency(),
        CurrencySubcommand::Set { code } => ctx.currency.set_currency_code(&code)?,
    };

    writeln!(out, "{currency} ({})", currency.symbol())?;

    Ok(())
}
