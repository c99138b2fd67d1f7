//! Cart store.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use storefront::{
    cart::{AddOutcome, Cart, CartLineItem, QuantityChange},
    currency::CurrencyCode,
    products::ProductId,
    totals::{OrderSummary, OrderTotals},
};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::{
    domain::{carts::errors::CartStoreError, products::ProductsGateway},
    notices::{Notice, Notifier},
    storage::{CART_KEY, KeyValueStore},
};

pub const ADDED_TO_CART: &str = "Added to cart";
pub const REMOVED_FROM_CART: &str = "Removed from cart";
pub const CART_CLEARED: &str = "Cart cleared";
pub const OUT_OF_STOCK: &str = "This product is currently out of stock";
pub const ADD_FAILED: &str = "Failed to add item to cart";
pub const CART_NOT_SAVED: &str = "Your cart could not be saved on this device";

/// The customer's cart, persisted to client-local storage after every mutation.
///
/// Mutations are serialized through one lock. `add_item` fetches the product before taking the
/// lock, so overlapping adds of the same product each count.
pub struct CartStore {
    cart: Mutex<Cart>,
    in_flight: AtomicUsize,
    products: Arc<dyn ProductsGateway>,
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
}

impl CartStore {
    /// Create a store, restoring any cart previously saved in `storage`.
    ///
    /// Unreadable or malformed saved carts are logged and replaced by an empty cart.
    pub fn load(
        products: Arc<dyn ProductsGateway>,
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let cart = restore(storage.as_ref());

        Self {
            cart: Mutex::new(cart),
            in_flight: AtomicUsize::new(0),
            products,
            storage,
            notifier,
        }
    }

    fn persist(&self, cart: &Cart) {
        let encoded = match serde_json::to_string(cart.lines()) {
            Ok(encoded) => encoded,
            Err(error) => {
                error!(key = CART_KEY, %error, "failed to encode cart");
                self.notifier.notify(Notice::warning(CART_NOT_SAVED));

                return;
            }
        };

        if let Err(error) = self.storage.set(CART_KEY, &encoded) {
            error!(key = CART_KEY, %error, "failed to persist cart");
            self.notifier.notify(Notice::warning(CART_NOT_SAVED));
        }
    }
}

#[async_trait]
impl CartService for CartStore {
    async fn add_item(&self, product_id: &ProductId) -> Result<AddOutcome, CartStoreError> {
        let snapshot = {
            let _loading = LoadingGuard::enter(&self.in_flight);

            self.products.get_product(product_id).await
        };

        let snapshot = match snapshot {
            Ok(snapshot) => snapshot,
            Err(source) => {
                warn!(product_id = %product_id, error = %source, "failed to fetch product for cart");
                self.notifier.notify(Notice::error(ADD_FAILED));

                return Err(source.into());
            }
        };

        let mut cart = self.cart.lock().await;

        let outcome = match cart.add(snapshot, Timestamp::now()) {
            Ok(outcome) => outcome,
            Err(source) => {
                let error = CartStoreError::from(source);

                if matches!(error, CartStoreError::OutOfStock(_)) {
                    self.notifier.notify(Notice::error(OUT_OF_STOCK));
                } else {
                    self.notifier.notify(Notice::error(ADD_FAILED));
                }

                return Err(error);
            }
        };

        info!(product_id = %product_id, ?outcome, "added to cart");

        self.persist(&cart);
        self.notifier.notify(Notice::success(ADDED_TO_CART));

        Ok(outcome)
    }

    async fn remove_item(&self, product_id: &ProductId) -> bool {
        let mut cart = self.cart.lock().await;

        let removed = cart.remove(product_id);

        debug!(product_id = %product_id, removed, "removed from cart");

        self.persist(&cart);
        self.notifier.notify(Notice::success(REMOVED_FROM_CART));

        removed
    }

    async fn update_quantity(
        &self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<QuantityChange, CartStoreError> {
        if quantity <= 0 {
            let removed = self.remove_item(product_id).await;

            return Ok(if removed {
                QuantityChange::Removed
            } else {
                QuantityChange::NotFound
            });
        }

        let mut cart = self.cart.lock().await;

        let change = cart.update_quantity(product_id, quantity)?;

        if let QuantityChange::Updated(quantity) = change {
            debug!(product_id = %product_id, quantity = quantity.get(), "updated cart quantity");

            self.persist(&cart);
        }

        Ok(change)
    }

    async fn clear_cart(&self) {
        let mut cart = self.cart.lock().await;

        cart.clear();

        self.persist(&cart);
        self.notifier.notify(Notice::success(CART_CLEARED));
    }

    async fn items(&self) -> Vec<CartLineItem> {
        self.cart.lock().await.lines().to_vec()
    }

    async fn item_count(&self) -> u64 {
        self.cart.lock().await.item_count()
    }

    async fn total_amount(&self) -> i64 {
        self.cart.lock().await.total_amount()
    }

    async fn totals(&self, currency: CurrencyCode) -> OrderTotals {
        OrderTotals::compute(self.cart.lock().await.lines(), currency)
    }

    async fn summary(&self, currency: CurrencyCode) -> OrderSummary {
        OrderSummary::new(self.cart.lock().await.lines(), currency)
    }

    fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire) > 0
    }
}

#[automock]
#[async_trait]
pub trait CartService: Send + Sync {
    /// Add one unit of a product, fetching its current details first.
    ///
    /// Failures leave the cart untouched and are reported to the customer as notices.
    ///
    /// # Errors
    ///
    /// - [`CartStoreError::Product`]: the product could not be fetched.
    /// - [`CartStoreError::OutOfStock`]: the product is not currently available.
    async fn add_item(&self, product_id: &ProductId) -> Result<AddOutcome, CartStoreError>;

    /// Remove a product's line. Removing an absent product is not an error.
    async fn remove_item(&self, product_id: &ProductId) -> bool;

    /// Set a product's quantity. Zero or below removes the line.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is too large for a cart line.
    async fn update_quantity(
        &self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<QuantityChange, CartStoreError>;

    /// Empty the cart.
    async fn clear_cart(&self);

    /// Current lines in insertion order.
    async fn items(&self) -> Vec<CartLineItem>;

    async fn item_count(&self) -> u64;

    /// Cart total in minor units, before shipping.
    async fn total_amount(&self) -> i64;

    /// Order totals for the current cart in the given currency.
    async fn totals(&self, currency: CurrencyCode) -> OrderTotals;

    /// Display-ready order summary for the current cart.
    async fn summary(&self, currency: CurrencyCode) -> OrderSummary;

    /// Whether a product fetch for `add_item` is in flight.
    fn is_loading(&self) -> bool;
}

fn restore(storage: &dyn KeyValueStore) -> Cart {
    let raw = match storage.get(CART_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::new(),
        Err(error) => {
            warn!(key = CART_KEY, %error, "failed to read saved cart, starting empty");

            return Cart::new();
        }
    };

    let lines = match serde_json::from_str::<Vec<CartLineItem>>(&raw) {
        Ok(lines) => lines,
        Err(error) => {
            warn!(key = CART_KEY, %error, "saved cart is malformed, starting empty");

            return Cart::new();
        }
    };

    Cart::from_lines(lines).unwrap_or_else(|error| {
        warn!(key = CART_KEY, %error, "saved cart is inconsistent, starting empty");

        Cart::new()
    })
}

struct LoadingGuard<'a>(&'a AtomicUsize);

impl<'a> LoadingGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);

        Self(counter)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use std::{io, time::Duration};

    use async_trait::async_trait;
    use storefront::{
        fixtures::{snapshot, sold_out},
        products::ProductSnapshot,
        totals::USD_INTERNATIONAL_SHIPPING,
    };
    use testresult::TestResult;

    use crate::{
        domain::products::ProductsGatewayError,
        notices::NoticeLevel,
        storage::{MockKeyValueStore, StorageError},
        test::{TestContext, catalog},
    };

    use super::*;

    struct SlowCatalog;

    #[async_trait]
    impl ProductsGateway for SlowCatalog {
        async fn get_product(
            &self,
            id: &ProductId,
        ) -> Result<ProductSnapshot, ProductsGatewayError> {
            tokio::time::sleep(Duration::from_millis(20)).await;

            Ok(snapshot(id.as_str(), 179_99))
        }
    }

    #[tokio::test]
    async fn repeated_adds_merge_into_one_line() -> TestResult {
        let ctx = TestContext::new();
        let store = ctx.cart_store(catalog(vec![snapshot("watch-1", 179_99)]));
        let id = ProductId::new("watch-1");

        assert_eq!(store.add_item(&id).await?, AddOutcome::Inserted);
        assert!(matches!(store.add_item(&id).await?, AddOutcome::Merged(q) if q.get() == 2));

        let items = store.items().await;

        assert_eq!(items.len(), 1);
        assert_eq!(store.item_count().await, 2);
        assert_eq!(store.total_amount().await, 359_98);

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_adds_of_same_product_both_count() -> TestResult {
        let ctx = TestContext::new();
        let store = ctx.cart_store(SlowCatalog);
        let id = ProductId::new("watch-1");

        let (first, second, loading) = tokio::join!(store.add_item(&id), store.add_item(&id), async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            store.is_loading()
        });

        first?;
        second?;

        assert!(loading, "expected a fetch to be in flight");
        assert!(!store.is_loading());
        assert_eq!(store.items().await.len(), 1);
        assert_eq!(store.item_count().await, 2);

        Ok(())
    }

    #[tokio::test]
    async fn out_of_stock_product_is_not_added() -> TestResult {
        let ctx = TestContext::new();
        let store = ctx.cart_store(catalog(vec![sold_out("watch-9", 99_00)]));

        let result = store.add_item(&ProductId::new("watch-9")).await;

        assert!(
            matches!(result, Err(CartStoreError::OutOfStock(_))),
            "expected OutOfStock, got {result:?}"
        );
        assert!(store.items().await.is_empty());
        assert_eq!(ctx.notices.drain(), vec![Notice::error(OUT_OF_STOCK)]);
        assert_eq!(ctx.storage.get(CART_KEY)?, None);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_product_reports_failure() -> TestResult {
        let ctx = TestContext::new();
        let store = ctx.cart_store(catalog(vec![]));

        let result = store.add_item(&ProductId::new("missing")).await;

        assert!(
            matches!(
                result,
                Err(CartStoreError::Product(ProductsGatewayError::NotFound(_)))
            ),
            "expected NotFound, got {result:?}"
        );
        assert!(store.items().await.is_empty());
        assert_eq!(ctx.notices.drain(), vec![Notice::error(ADD_FAILED)]);

        Ok(())
    }

    #[tokio::test]
    async fn remove_is_idempotent() -> TestResult {
        let ctx = TestContext::new();
        let store = ctx.cart_store(catalog(vec![snapshot("watch-1", 179_99)]));
        let id = ProductId::new("watch-1");

        store.add_item(&id).await?;

        assert!(store.remove_item(&id).await);
        assert!(!store.remove_item(&id).await);
        assert!(store.items().await.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn zero_or_negative_quantity_removes_line() -> TestResult {
        let ctx = TestContext::new();
        let store = ctx.cart_store(catalog(vec![
            snapshot("watch-1", 179_99),
            snapshot("watch-2", 5_00),
        ]));
        let first = ProductId::new("watch-1");
        let second = ProductId::new("watch-2");

        store.add_item(&first).await?;
        store.add_item(&second).await?;

        assert_eq!(store.update_quantity(&first, 0).await?, QuantityChange::Removed);
        assert_eq!(store.update_quantity(&second, -5).await?, QuantityChange::Removed);
        assert!(store.items().await.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn update_quantity_sets_value_and_ignores_unknown_products() -> TestResult {
        let ctx = TestContext::new();
        let store = ctx.cart_store(catalog(vec![snapshot("watch-1", 10_00)]));
        let id = ProductId::new("watch-1");

        store.add_item(&id).await?;

        assert!(matches!(
            store.update_quantity(&id, 7).await?,
            QuantityChange::Updated(q) if q.get() == 7
        ));
        assert_eq!(
            store.update_quantity(&ProductId::new("other"), 3).await?,
            QuantityChange::NotFound
        );
        assert_eq!(store.total_amount().await, 70_00);

        Ok(())
    }

    #[tokio::test]
    async fn mutations_are_persisted_and_restored() -> TestResult {
        let ctx = TestContext::new();
        let id = ProductId::new("watch-1");

        {
            let store = ctx.cart_store(catalog(vec![snapshot("watch-1", 179_99)]));

            store.add_item(&id).await?;
            store.add_item(&id).await?;
        }

        let restored = ctx.cart_store(catalog(vec![]));

        assert_eq!(restored.item_count().await, 2);
        assert_eq!(restored.total_amount().await, 359_98);

        restored.clear_cart().await;

        assert_eq!(ctx.storage.get(CART_KEY)?.as_deref(), Some("[]"));

        Ok(())
    }

    #[tokio::test]
    async fn malformed_saved_cart_falls_back_to_empty() -> TestResult {
        let ctx = TestContext::new();

        ctx.storage.set(CART_KEY, "{not json")?;

        let store = ctx.cart_store(catalog(vec![]));

        assert!(store.items().await.is_empty());
        assert_eq!(store.total_amount().await, 0);

        Ok(())
    }

    #[tokio::test]
    async fn restores_cart_saved_by_web_storefront() -> TestResult {
        let ctx = TestContext::new();

        ctx.storage.set(
            CART_KEY,
            r#"[{"id":"cart-watch-1-1700000000000","productId":"watch-1","quantity":2,"product":{"id":"watch-1","name":"Santos","price":179.99,"featuredImage":null,"slug":"santos","inStock":true}}]"#,
        )?;

        let store = ctx.cart_store(catalog(vec![]));

        assert_eq!(store.item_count().await, 2);
        assert_eq!(store.total_amount().await, 359_98);

        Ok(())
    }

    #[tokio::test]
    async fn persistence_failure_keeps_mutation_and_warns() -> TestResult {
        let ctx = TestContext::new();
        let mut storage = MockKeyValueStore::new();

        storage.expect_get().returning(|_| Ok(None));
        storage.expect_set().times(1).returning(|key, _| {
            Err(StorageError::Io {
                key: key.to_string(),
                source: io::Error::other("disk full"),
            })
        });

        let store = CartStore::load(
            Arc::new(catalog(vec![snapshot("watch-1", 179_99)])),
            Arc::new(storage),
            ctx.notices.clone(),
        );

        store.add_item(&ProductId::new("watch-1")).await?;

        assert_eq!(store.item_count().await, 1);

        let levels: Vec<_> = ctx.notices.drain().into_iter().map(|n| n.level).collect();

        assert_eq!(levels, vec![NoticeLevel::Warning, NoticeLevel::Success]);

        Ok(())
    }

    #[tokio::test]
    async fn price_snapshot_is_kept_when_product_price_changes() -> TestResult {
        let ctx = TestContext::new();
        let id = ProductId::new("watch-1");

        ctx.cart_store(catalog(vec![snapshot("watch-1", 179_99)]))
            .add_item(&id)
            .await?;

        let store = ctx.cart_store(catalog(vec![snapshot("watch-1", 199_99)]));

        store.add_item(&id).await?;

        assert_eq!(store.total_amount().await, 359_98);

        Ok(())
    }

    #[tokio::test]
    async fn switching_to_usd_applies_usd_shipping() -> TestResult {
        let ctx = TestContext::new();
        let store = ctx.cart_store(catalog(vec![snapshot("watch-1", 179_99)]));
        let id = ProductId::new("watch-1");

        store.add_item(&id).await?;
        store.add_item(&id).await?;

        let totals = store.totals(CurrencyCode::USD).await;

        assert_eq!(totals.subtotal, 359_98);
        assert_eq!(totals.shipping_cost, USD_INTERNATIONAL_SHIPPING);
        assert_eq!(totals.total, 359_98 + USD_INTERNATIONAL_SHIPPING);

        Ok(())
    }
}
