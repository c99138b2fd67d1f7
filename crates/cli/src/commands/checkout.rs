//! Checkout command.

use std::io::Write;

use clap::Args;
use storefront::checkout::{Address, CheckoutForm, Country};
use storefront_app::{
    context::StorefrontContext,
    domain::{carts::CartService, checkout::SubmitOutcome, currency::CurrencyService},
};

use crate::{commands::CliError, output};

/// Contact details, shipping and billing addresses, and an optional payment secret.
///
/// Missing details are reported by form validation rather than by argument parsing.
#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Contact email
    #[arg(long, default_value = "")]
    email: String,

    /// Contact name
    #[arg(long, default_value = "")]
    name: String,

    /// Contact phone
    #[arg(long, default_value = "")]
    phone: String,

    #[command(flatten)]
    shipping: ShippingArgs,

    #[command(flatten)]
    billing: BillingArgs,

    /// Client secret of an existing order; confirms payment instead of creating an order
    #[arg(long, env = "STOREFRONT_CLIENT_SECRET", hide_env_values = true)]
    client_secret: Option<String>,
}

#[derive(Debug, Args)]
struct ShippingArgs {
    /// Shipping first name
    #[arg(long, default_value = "")]
    first_name: String,

    /// Shipping last name
    #[arg(long, default_value = "")]
    last_name: String,

    /// Shipping company
    #[arg(long, default_value = "")]
    company: String,

    /// Shipping address line 1
    #[arg(long, default_value = "")]
    line1: String,

    /// Shipping address line 2
    #[arg(long, default_value = "")]
    line2: String,

    /// Shipping city
    #[arg(long, default_value = "")]
    city: String,

    /// Shipping state or province
    #[arg(long, default_value = "")]
    state: String,

    /// Shipping postal code
    #[arg(long, default_value = "")]
    postal_code: String,

    /// Shipping country code
    #[arg(long, value_parser = parse_country, default_value = "GB")]
    country: Country,
}

/// Billing address; when every field is omitted billing is the same as shipping.
#[derive(Debug, Args)]
struct BillingArgs {
    /// Billing first name
    #[arg(long)]
    billing_first_name: Option<String>,

    /// Billing last name
    #[arg(long)]
    billing_last_name: Option<String>,

    /// Billing company
    #[arg(long)]
    billing_company: Option<String>,

    /// Billing address line 1
    #[arg(long)]
    billing_line1: Option<String>,

    /// Billing address line 2
    #[arg(long)]
    billing_line2: Option<String>,

    /// Billing city
    #[arg(long)]
    billing_city: Option<String>,

    /// Billing state or province
    #[arg(long)]
    billing_state: Option<String>,

    /// Billing postal code
    #[arg(long)]
    billing_postal_code: Option<String>,

    /// Billing country code
    #[arg(long, value_parser = parse_country)]
    billing_country: Option<Country>,
}

impl ShippingArgs {
    fn to_address(&self) -> Address {
        Address {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            company: self.company.clone(),
            address_line1: self.line1.clone(),
            address_line2: self.line2.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            postal_code: self.postal_code.clone(),
            ..Address::new(self.country)
        }
    }
}

impl BillingArgs {
    fn is_empty(&self) -> bool {
        [
            &self.billing_first_name,
            &self.billing_last_name,
            &self.billing_company,
            &self.billing_line1,
            &self.billing_line2,
            &self.billing_city,
            &self.billing_state,
            &self.billing_postal_code,
        ]
        .iter()
        .all(|field| field.is_none())
            && self.billing_country.is_none()
    }

    fn to_address(&self) -> Option<Address> {
        if self.is_empty() {
            return None;
        }

        let text = |field: &Option<String>| field.clone().unwrap_or_default();

        Some(Address {
            first_name: text(&self.billing_first_name),
            last_name: text(&self.billing_last_name),
            company: text(&self.billing_company),
            address_line1: text(&self.billing_line1),
            address_line2: text(&self.billing_line2),
            city: text(&self.billing_city),
            state: text(&self.billing_state),
            postal_code: text(&self.billing_postal_code),
            ..Address::new(self.billing_country.unwrap_or_default())
        })
    }
}

impl CheckoutArgs {
    fn to_form(&self) -> CheckoutForm {
        let mut form = CheckoutForm::new();

        form.set_customer_email(self.email.as_str());
        form.set_customer_name(self.name.as_str());
        form.set_customer_phone(self.phone.as_str());
        form.set_shipping_address(self.shipping.to_address());

        if let Some(billing) = self.billing.to_address() {
            form.set_same_as_shipping(false);
            form.set_billing_address(billing);
        }

        form
    }
}

fn parse_country(value: &str) -> Result<Country, String> {
    Country::from_code(value).ok_or_else(|| format!("unsupported country code: {value}"))
}

pub(crate) async fn run(
    args: CheckoutArgs,
    ctx: &StorefrontContext,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if ctx.cart.item_count().await == 0 {
        return Err(CliError::EmptyCart);
    }

    let session = ctx.checkout(args.to_form());

    if let Some(client_secret) = args.client_secret {
        session.set_client_secret(client_secret);
    }

    let summary = ctx.cart.summary(ctx.currency.currency()).await;

    output::write_summary(out, &summary)?;
    writeln!(out)?;

    match session.submit().await? {
        SubmitOutcome::Invalid(errors) => {
            output::write_field_errors(out, &errors)?;

            Err(CliError::InvalidDetails)
        }
        SubmitOutcome::OrderCreated(handle) => {
            writeln!(out, "Order {} created", handle.order_number)?;
            writeln!(out, "order id: {}", handle.order_id)?;
            writeln!(out, "client secret: {}", handle.client_secret)?;
            writeln!(
                out,
                "Run checkout again with --client-secret to complete payment"
            )?;

            Ok(())
        }
        SubmitOutcome::PaymentSucceeded(payment_id) => {
            ctx.cart.clear_cart().await;

            writeln!(out, "Payment {payment_id} succeeded. Thank you for your order!")?;

            Ok(())
        }
        SubmitOutcome::PaymentIncomplete(status) => Err(CliError::PaymentIncomplete(status)),
    }
}
