//! Currencies

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rusty_money::iso::{self, Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while interpreting a currency code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    /// The code is not one of the supported display currencies.
    #[error("unsupported currency code: {0}")]
    UnknownCurrency(String),
}

/// Display currency selectable by the customer.
///
/// Selecting a currency only changes how amounts are labelled; no exchange rate is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CurrencyCode {
    /// Pound sterling, the shop's home currency.
    #[default]
    GBP,

    /// US dollar.
    USD,

    /// Euro.
    EUR,

    /// Canadian dollar.
    CAD,

    /// Australian dollar.
    AUD,
}

impl CurrencyCode {
    /// Every selectable currency, in selector order.
    pub const ALL: [CurrencyCode; 5] = [
        CurrencyCode::GBP,
        CurrencyCode::USD,
        CurrencyCode::EUR,
        CurrencyCode::CAD,
        CurrencyCode::AUD,
    ];

    /// ISO 4217 alpha code.
    pub const fn as_str(self) -> &'static str {
        match self {
            CurrencyCode::GBP => "GBP",
            CurrencyCode::USD => "USD",
            CurrencyCode::EUR => "EUR",
            CurrencyCode::CAD => "CAD",
            CurrencyCode::AUD => "AUD",
        }
    }

    /// Symbol used when formatting amounts.
    pub const fn symbol(self) -> &'static str {
        match self {
            CurrencyCode::GBP => "£",
            CurrencyCode::USD => "$",
            CurrencyCode::EUR => "€",
            CurrencyCode::CAD => "CA$",
            CurrencyCode::AUD => "A$",
        }
    }

    /// The matching `rusty_money` currency.
    pub fn iso(self) -> &'static Currency {
        match self {
            CurrencyCode::GBP => iso::GBP,
            CurrencyCode::USD => iso::USD,
            CurrencyCode::EUR => iso::EUR,
            CurrencyCode::CAD => iso::CAD,
            CurrencyCode::AUD => iso::AUD,
        }
    }

    /// Whether orders in this currency ship domestically.
    pub const fn is_domestic(self) -> bool {
        matches!(self, CurrencyCode::GBP)
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        CurrencyCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CurrencyError::UnknownCurrency(trimmed.to_string()))
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.as_str().to_string()
    }
}
