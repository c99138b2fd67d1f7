//! Currency preference store.

use std::sync::{Arc, RwLock};

use mockall::automock;
use storefront::currency::{CurrencyCode, CurrencyError};
use tracing::{error, info, warn};

use crate::storage::{CURRENCY_KEY, KeyValueStore};

/// The customer's preferred display currency, persisted on every change.
pub struct CurrencyStore {
    currency: RwLock<CurrencyCode>,
    storage: Arc<dyn KeyValueStore>,
}

impl CurrencyStore {
    /// Create a store from the saved preference, defaulting to GBP.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let currency = match storage.get(CURRENCY_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|error: CurrencyError| {
                warn!(key = CURRENCY_KEY, %error, "saved currency is invalid, using default");

                CurrencyCode::default()
            }),
            Ok(None) => CurrencyCode::default(),
            Err(error) => {
                warn!(key = CURRENCY_KEY, %error, "failed to read saved currency, using default");

                CurrencyCode::default()
            }
        };

        Self {
            currency: RwLock::new(currency),
            storage,
        }
    }
}

impl CurrencyService for CurrencyStore {
    fn currency(&self) -> CurrencyCode {
        self.currency
            .read()
            .map_or_else(|poisoned| *poisoned.into_inner(), |currency| *currency)
    }

    fn set_currency(&self, currency: CurrencyCode) {
        match self.currency.write() {
            Ok(mut current) => *current = currency,
            Err(poisoned) => *poisoned.into_inner() = currency,
        }

        info!(%currency, "display currency changed");

        if let Err(error) = self.storage.set(CURRENCY_KEY, currency.as_str()) {
            error!(key = CURRENCY_KEY, %error, "failed to persist currency");
        }
    }

    fn set_currency_code(&self, code: &str) -> Result<CurrencyCode, CurrencyError> {
        let currency = code.parse()?;

        self.set_currency(currency);

        Ok(currency)
    }
}

#[automock]
pub trait CurrencyService: Send + Sync {
    /// The current display currency.
    fn currency(&self) -> CurrencyCode;

    /// Switch the display currency and persist it.
    ///
    /// A failed write is logged; the in-memory preference still changes.
    fn set_currency(&self, currency: CurrencyCode);

    /// Parse and apply a currency code received from outside.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is not a supported currency.
    fn set_currency_code(&self, code: &str) -> Result<CurrencyCode, CurrencyError>;
}
