//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{AddOutcome, Cart, CartError, CartLineItem, LineItemId, QuantityChange},
    checkout::{
        Address, AddressField, CheckoutForm, CheckoutPhase, Country, CustomerProfile, FieldErrors,
        FieldKey, FormError, OrderRequest, SubmissionKind,
    },
    currency::{CurrencyCode, CurrencyError},
    pricing::{PriceError, format_price, minor_units, parse_price, to_money},
    products::{ProductId, ProductSnapshot},
    totals::{OrderSummary, OrderTotals, SummaryLine, shipping_cost},
};
