//! Cart commands.

use std::io::Write;

use clap::{Args, Subcommand};
use storefront::{cart::QuantityChange, products::ProductId};
use storefront_app::{
    context::StorefrontContext,
    domain::{carts::CartService, currency::CurrencyService},
};

use crate::{commands::CliError, output};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// List the cart lines
    Show,

    /// Add one unit of a product
    Add {
        /// Product id
        product_id: String,
    },

    /// Remove a product from the cart
    Remove {
        /// Product id
        product_id: String,
    },

    /// Set a product's quantity; zero or below removes it
    Set {
        /// Product id
        product_id: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Remove everything from the cart
    Clear,
}

pub(crate) async fn run(
    command: CartCommand,
    ctx: &StorefrontContext,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command.command {
        CartSubcommand::Show => {}
        CartSubcommand::Add { product_id } => {
            ctx.cart.add_item(&ProductId::new(product_id)).await?;
        }
        CartSubcommand::Remove { product_id } => {
            ctx.cart.remove_item(&ProductId::new(product_id)).await;
        }
        CartSubcommand::Set {
            product_id,
            quantity,
        } => {
            let product_id = ProductId::new(product_id);

            if ctx.cart.update_quantity(&product_id, quantity).await? == QuantityChange::NotFound
            {
                writeln!(out, "{product_id} is not in the cart")?;
            }
        }
        CartSubcommand::Clear => {
            ctx.cart.clear_cart().await;
        }
    }

    let summary = ctx.cart.summary(ctx.currency.currency()).await;

    output::write_cart(out, &summary)?;

    Ok(())
}
