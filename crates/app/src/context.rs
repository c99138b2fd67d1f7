//! App Context

use std::{path::PathBuf, sync::Arc};

use storefront::checkout::CheckoutForm;
use thiserror::Error;

use crate::{
    api::{ApiClient, ApiConfig},
    domain::{
        carts::{CartService, CartStore},
        checkout::CheckoutSession,
        currency::{CurrencyService, CurrencyStore},
        orders::{HttpOrdersGateway, OrdersGateway},
        payments::{HttpPaymentProcessor, PaymentProcessor},
        products::{HttpProductsGateway, ProductsGateway},
    },
    notices::Notifier,
    storage::{FileStore, KeyValueStore, MemoryStore, StorageError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to open storage")]
    Storage(#[source] StorageError),
}

/// Where client-local state is kept.
#[derive(Debug, Clone)]
pub enum StorageLocation {
    /// Nothing survives the process.
    Memory,

    /// One file per key in the given directory.
    Directory(PathBuf),
}

/// Stores and gateways for one storefront client session.
#[derive(Clone)]
pub struct StorefrontContext {
    pub cart: Arc<dyn CartService>,
    pub currency: Arc<dyn CurrencyService>,
    pub products: Arc<dyn ProductsGateway>,
    pub orders: Arc<dyn OrdersGateway>,
    pub payments: Arc<dyn PaymentProcessor>,
    pub notifier: Arc<dyn Notifier>,
}

impl StorefrontContext {
    /// Build a context talking to the backend at `api` and keeping state in `storage`.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage directory cannot be opened.
    pub fn new(
        api: ApiConfig,
        storage: StorageLocation,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, AppInitError> {
        let storage: Arc<dyn KeyValueStore> = match storage {
            StorageLocation::Memory => Arc::new(MemoryStore::new()),
            StorageLocation::Directory(dir) => {
                Arc::new(FileStore::open(dir).map_err(AppInitError::Storage)?)
            }
        };

        let client = ApiClient::new(api);

        Ok(Self::from_parts(
            Arc::new(HttpProductsGateway::new(client.clone())),
            Arc::new(HttpOrdersGateway::new(client.clone())),
            Arc::new(HttpPaymentProcessor::new(client)),
            storage,
            notifier,
        ))
    }

    /// Build a context from already constructed collaborators.
    pub fn from_parts(
        products: Arc<dyn ProductsGateway>,
        orders: Arc<dyn OrdersGateway>,
        payments: Arc<dyn PaymentProcessor>,
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            cart: Arc::new(CartStore::load(
                Arc::clone(&products),
                Arc::clone(&storage),
                Arc::clone(&notifier),
            )),
            currency: Arc::new(CurrencyStore::load(storage)),
            products,
            orders,
            payments,
            notifier,
        }
    }

    /// Start a checkout for the given form.
    pub fn checkout(&self, form: CheckoutForm) -> CheckoutSession {
        CheckoutSession::new(form, Arc::clone(&self.orders), Arc::clone(&self.payments))
    }
}
