//! Pricing
//!
//! Prices are held as integer minor units (pence/cents). Every supported display currency has two
//! decimal places, so an amount keeps the same minor-unit value whichever currency labels it.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::currency::CurrencyCode;

/// Errors raised while converting a catalog price into minor units.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The text could not be parsed as a decimal amount.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Catalog prices must not be negative.
    #[error("negative price: {0}")]
    Negative(Decimal),

    /// The amount does not fit in minor units.
    #[error("price out of range: {0}")]
    OutOfRange(Decimal),
}

/// Convert a decimal major-unit amount (e.g. `179.99`) into minor units, rounding half to even
/// (banker's rounding) at the second decimal place.
///
/// # Errors
///
/// - [`PriceError::Negative`]: the amount is below zero.
/// - [`PriceError::OutOfRange`]: the amount overflows an `i64` of minor units.
pub fn minor_units(amount: Decimal) -> Result<i64, PriceError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(PriceError::Negative(amount));
    }

    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or(PriceError::OutOfRange(amount))
}

/// Parse a decimal price string (e.g. `"179.99"`) into minor units.
///
/// # Errors
///
/// Returns a [`PriceError`] if the text is not a decimal number or the amount is not a valid price.
pub fn parse_price(s: &str) -> Result<i64, PriceError> {
    let amount = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| PriceError::InvalidPrice(s.to_string()))?;

    minor_units(amount)
}

/// Decimal major-unit value of a minor-unit amount, e.g. `17999` is `179.99`.
pub fn major_units(minor_units: i64) -> Decimal {
    Decimal::new(minor_units, 2)
}

/// Serde adapter storing a minor-unit amount as a JSON number in major units (`179.99`).
///
/// Reads numbers or numeric strings.
pub mod as_major_units {
    use rust_decimal::{Decimal, prelude::ToPrimitive};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::Error as _};

    use super::{major_units, minor_units};

    /// Write minor units as a major-unit number.
    ///
    /// # Errors
    ///
    /// Fails if the amount has no floating point representation.
    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        let amount = major_units(*value)
            .to_f64()
            .ok_or_else(|| S::Error::custom(format!("price out of range: {value}")))?;

        serializer.serialize_f64(amount)
    }

    /// Read a major-unit number into minor units.
    ///
    /// # Errors
    ///
    /// Fails if the value is not a decimal amount or is not a valid price.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        minor_units(<Decimal as Deserialize>::deserialize(deserializer)?).map_err(D::Error::custom)
    }

    /// [`as_major_units`](super::as_major_units) for optional amounts.
    pub mod option {
        use rust_decimal::Decimal;
        use serde::{Deserialize, Deserializer, Serializer};

        use super::super::minor_units;

        /// Write an optional minor-unit amount; `None` becomes `null`.
        ///
        /// # Errors
        ///
        /// Fails if the amount has no floating point representation.
        pub fn serialize<S: Serializer>(
            value: &Option<i64>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => super::serialize(value, serializer),
                None => serializer.serialize_none(),
            }
        }

        /// Read an optional major-unit number into minor units.
        ///
        /// # Errors
        ///
        /// Fails if a present value is not a valid price.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<i64>, D::Error> {
            Option::<Decimal>::deserialize(deserializer)?
                .map(minor_units)
                .transpose()
                .map_err(serde::de::Error::custom)
        }
    }
}

/// Label a minor-unit amount with a display currency.
pub fn to_money(minor_units: i64, currency: CurrencyCode) -> Money<'static, Currency> {
    Money::from_minor(minor_units, currency.iso())
}

/// Format a minor-unit amount for display, e.g. `£1,249.50`.
///
/// Decimal places follow the currency's exponent.
pub fn format_price(minor_units: i64, currency: CurrencyCode) -> String {
    let money = to_money(minor_units, currency);
    let exponent = money.currency().exponent;
    let scale = 10_u64.saturating_pow(exponent);
    let abs_minor = minor_units.unsigned_abs();
    let sign = if minor_units < 0 { "-" } else { "" };
    let major = group_thousands(abs_minor / scale);

    if exponent == 0 {
        return format!("{sign}{}{major}", currency.symbol());
    }

    let width = usize::try_from(exponent).unwrap_or(2);

    format!(
        "{sign}{}{major}.{:0width$}",
        currency.symbol(),
        abs_minor % scale
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }

        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_price_reads_two_decimal_places() -> TestResult {
        assert_eq!(parse_price("179.99")?, 179_99);
        assert_eq!(parse_price("4.5")?, 4_50);
        assert_eq!(parse_price("12")?, 12_00);

        Ok(())
    }

    #[test]
    fn parse_price_rounds_sub_minor_digits() -> TestResult {
        assert_eq!(parse_price("1.005")?, 1_00);
        assert_eq!(parse_price("1.015")?, 1_02);

        Ok(())
    }

    #[test]
    fn parse_price_rejects_garbage() {
        let result = parse_price("twelve pounds");

        assert!(matches!(result, Err(PriceError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_negative_amounts() {
        let result = parse_price("-1.00");

        assert!(matches!(result, Err(PriceError::Negative(_))));
    }

    #[test]
    fn minor_units_accepts_zero() -> TestResult {
        assert_eq!(minor_units(Decimal::ZERO)?, 0);

        Ok(())
    }

    #[test]
    fn minor_units_rejects_overflow() {
        let result = minor_units(Decimal::MAX);

        assert!(matches!(result, Err(PriceError::OutOfRange(_))));
    }

    #[test]
    fn format_price_gbp() {
        assert_eq!(format_price(359_98, CurrencyCode::GBP), "£359.98");
    }

    #[test]
    fn format_price_usd() {
        assert_eq!(format_price(18_99, CurrencyCode::USD), "$18.99");
    }

    #[test]
    fn format_price_prefixed_symbols() {
        assert_eq!(format_price(10_00, CurrencyCode::CAD), "CA$10.00");
        assert_eq!(format_price(10_00, CurrencyCode::AUD), "A$10.00");
    }

    #[test]
    fn format_price_zero() {
        assert_eq!(format_price(0, CurrencyCode::EUR), "€0.00");
    }

    #[test]
    fn format_price_negative() {
        assert_eq!(format_price(-12_50, CurrencyCode::GBP), "-£12.50");
    }

    #[test]
    fn format_price_groups_thousands() {
        assert_eq!(format_price(1_249_50, CurrencyCode::GBP), "£1,249.50");
        assert_eq!(format_price(1_000_000_00, CurrencyCode::USD), "$1,000,000.00");
        assert_eq!(format_price(999_99, CurrencyCode::USD), "$999.99");
    }

    #[test]
    fn major_units_shifts_two_places() {
        assert_eq!(major_units(179_99), Decimal::new(17_999, 2));
        assert_eq!(major_units(0), Decimal::ZERO);
    }

    #[test]
    fn to_money_keeps_minor_units() {
        let money = to_money(16_99, CurrencyCode::EUR);

        assert_eq!(money.to_minor_units(), 16_99);
        assert_eq!(money.currency().iso_alpha_code, "EUR");
    }
}
