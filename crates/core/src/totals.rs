//! Order Totals
//!
//! Subtotal, shipping and total for a set of cart lines under a display currency. Nothing here is
//! cached; callers recompute whenever the lines or the currency change.

use crate::{
    cart::CartLineItem,
    currency::CurrencyCode,
    pricing::format_price,
};

/// Flat UK shipping rate, in pence.
pub const DOMESTIC_SHIPPING: i64 = 4_99;

/// Flat international shipping rate for currencies without a specific approximation.
pub const INTERNATIONAL_SHIPPING: i64 = 14_99;

/// International rate approximated in US dollars.
pub const USD_INTERNATIONAL_SHIPPING: i64 = 18_99;

/// International rate approximated in euros.
pub const EUR_INTERNATIONAL_SHIPPING: i64 = 16_99;

/// Customs notice shown on orders outside the UK.
pub const INTERNATIONAL_NOTICE: &str =
    "International Order: You may be responsible for customs duties and taxes upon delivery.";

/// Shipping cost for an order displayed in the given currency.
///
/// This is a fixed price list, not an exchange-rate conversion.
pub const fn shipping_cost(currency: CurrencyCode) -> i64 {
    match currency {
        CurrencyCode::GBP => DOMESTIC_SHIPPING,
        CurrencyCode::USD => USD_INTERNATIONAL_SHIPPING,
        CurrencyCode::EUR => EUR_INTERNATIONAL_SHIPPING,
        CurrencyCode::CAD | CurrencyCode::AUD => INTERNATIONAL_SHIPPING,
    }
}

/// Derived order totals, all amounts in minor units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderTotals {
    /// Currency labelling the amounts.
    pub currency: CurrencyCode,

    /// Sum of unit price times quantity.
    pub subtotal: i64,

    /// Shipping for the order's currency.
    pub shipping_cost: i64,

    /// `subtotal + shipping_cost`.
    pub total: i64,

    /// Total number of units.
    pub item_count: u64,
}

impl OrderTotals {
    /// Compute totals for the given lines.
    pub fn compute(lines: &[CartLineItem], currency: CurrencyCode) -> Self {
        let subtotal = lines
            .iter()
            .fold(0_i64, |acc, line| acc.saturating_add(line.line_total()));

        let item_count = lines
            .iter()
            .map(|line| u64::from(line.quantity.get()))
            .sum();

        let shipping_cost = shipping_cost(currency);

        Self {
            currency,
            subtotal,
            shipping_cost,
            total: subtotal.saturating_add(shipping_cost),
            item_count,
        }
    }

    /// Whether shipping is shown as free.
    pub const fn is_free_shipping(&self) -> bool {
        self.shipping_cost <= 0
    }

    /// Whether the order ships outside the UK.
    pub const fn is_international(&self) -> bool {
        !self.currency.is_domestic()
    }

    /// Item count badge text, e.g. `1 item` or `3 items`.
    pub fn item_count_label(&self) -> String {
        let noun = if self.item_count == 1 { "item" } else { "items" };

        format!("{} {noun}", self.item_count)
    }
}

/// A formatted order summary line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryLine {
    /// Product name.
    pub name: String,

    /// Product page slug.
    pub slug: String,

    /// Units on the line.
    pub quantity: u32,

    /// Formatted unit price.
    pub unit_price: String,

    /// Formatted line total.
    pub line_total: String,
}

/// Order summary ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderSummary {
    /// The underlying totals.
    pub totals: OrderTotals,

    /// One entry per cart line, in cart order.
    pub lines: Vec<SummaryLine>,

    /// Formatted subtotal.
    pub subtotal: String,

    /// Formatted shipping, or `Free`.
    pub shipping: String,

    /// Formatted total.
    pub total: String,

    /// Customs notice for orders outside the UK.
    pub notice: Option<&'static str>,
}

impl OrderSummary {
    /// Build a summary for the given lines and currency.
    pub fn new(lines: &[CartLineItem], currency: CurrencyCode) -> Self {
        let totals = OrderTotals::compute(lines, currency);

        let lines = lines
            .iter()
            .map(|line| SummaryLine {
                name: line.product.name.clone(),
                slug: line.product.slug.clone(),
                quantity: line.quantity.get(),
                unit_price: format_price(line.product.price, currency),
                line_total: format_price(line.line_total(), currency),
            })
            .collect();

        let shipping = if totals.is_free_shipping() {
            "Free".to_string()
        } else {
            format_price(totals.shipping_cost, currency)
        };

        Self {
            lines,
            subtotal: format_price(totals.subtotal, currency),
            shipping,
            total: format_price(totals.total, currency),
            notice: totals.is_international().then_some(INTERNATIONAL_NOTICE),
            totals,
        }
    }
}
