//! Subcommands

use std::io::{self, Write};

use clap::Subcommand;
use storefront::currency::CurrencyError;
use storefront_app::{
    context::StorefrontContext,
    domain::{
        carts::{CartService, CartStoreError},
        checkout::CheckoutError,
        currency::CurrencyService,
    },
};
use thiserror::Error;

use crate::output;

mod cart;
mod checkout;
mod currency;

/// Errors reported by a subcommand.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Output could not be written.
    #[error("failed to write output")]
    Io(#[from] io::Error),

    /// A cart operation failed.
    #[error(transparent)]
    Cart(#[from] CartStoreError),

    /// The currency code was not recognised.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// Checkout could not proceed.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// Checkout needs at least one cart line.
    #[error("the cart is empty")]
    EmptyCart,

    /// Required checkout details are missing.
    #[error("checkout details are incomplete")]
    InvalidDetails,

    /// The processor did not complete the payment.
    #[error("payment was not completed (status: {0})")]
    PaymentIncomplete(String),
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Inspect or change the cart
    Cart(cart::CartCommand),

    /// Inspect or change the display currency
    Currency(currency::CurrencyCommand),

    /// Show the order summary in the display currency
    Summary,

    /// Validate details and create the order, or confirm its payment
    Checkout(Box<checkout::CheckoutArgs>),
}

impl Command {
    pub(crate) async fn run(
        self,
        ctx: &StorefrontContext,
        out: &mut impl Write,
    ) -> Result<(), CliError> {
        match self {
            Command::Cart(command) => cart::run(command, ctx, out).await,
            Command::Currency(command) => currency::run(command, ctx, out),
            Command::Summary => {
                let summary = ctx.cart.summary(ctx.currency.currency()).await;

                output::write_summary(out, &summary)?;

                Ok(())
            }
            Command::Checkout(args) => checkout::run(*args, ctx, out).await,
        }
    }
}
