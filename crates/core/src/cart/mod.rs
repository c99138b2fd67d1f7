//! Cart
//!
//! An ordered collection of line items holding at most one line per product.

use std::num::NonZeroU32;

use jiff::Timestamp;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::products::{ProductId, ProductSnapshot};

mod line_item;

pub use line_item::{CartLineItem, LineItemId};

/// Errors raised by cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The product cannot be ordered right now.
    #[error("product {0} is out of stock")]
    OutOfStock(ProductId),

    /// More than one line refers to the same product.
    #[error("duplicate cart line for product {0}")]
    DuplicateProduct(ProductId),

    /// The requested quantity cannot be represented.
    #[error("quantity {0} is out of range")]
    QuantityOutOfRange(i64),
}

/// Result of adding a product to the cart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Inserted,

    /// An existing line was incremented to the given quantity.
    Merged(NonZeroU32),
}

/// Result of a quantity update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now holds the given quantity.
    Updated(NonZeroU32),

    /// The requested quantity was zero or below, so the line was removed.
    Removed,

    /// No line matched the product; nothing changed.
    NotFound,
}

/// Shopping cart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from previously stored lines, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::DuplicateProduct`] if two lines refer to the same product.
    pub fn from_lines(lines: Vec<CartLineItem>) -> Result<Self, CartError> {
        let mut seen = FxHashSet::default();

        for line in &lines {
            if !seen.insert(&line.product_id) {
                return Err(CartError::DuplicateProduct(line.product_id.clone()));
            }
        }

        Ok(Self { items: lines })
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLineItem] {
        &self.items
    }

    /// The line for a product, if present.
    pub fn line(&self, product: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.product_id == product)
    }

    /// Add one unit of a product.
    ///
    /// An existing line for the product is incremented and keeps its original snapshot; otherwise
    /// a new line is appended.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::OutOfStock`] if the snapshot says the product is unavailable.
    pub fn add(&mut self, product: ProductSnapshot, now: Timestamp) -> Result<AddOutcome, CartError> {
        if !product.in_stock {
            return Err(CartError::OutOfStock(product.id));
        }

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product.id)
        {
            existing.quantity = existing.quantity.saturating_add(1);

            return Ok(AddOutcome::Merged(existing.quantity));
        }

        self.items.push(CartLineItem::new(product, now));

        Ok(AddOutcome::Inserted)
    }

    /// Remove the line for a product. Returns whether a line was removed.
    pub fn remove(&mut self, product: &ProductId) -> bool {
        let before = self.items.len();

        self.items.retain(|item| &item.product_id != product);

        self.items.len() != before
    }

    /// Set the quantity of a product's line; zero or below removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOutOfRange`] if the quantity does not fit a line quantity.
    pub fn update_quantity(
        &mut self,
        product: &ProductId,
        quantity: i64,
    ) -> Result<QuantityChange, CartError> {
        if quantity <= 0 {
            return Ok(if self.remove(product) {
                QuantityChange::Removed
            } else {
                QuantityChange::NotFound
            });
        }

        let quantity = u32::try_from(quantity)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(CartError::QuantityOutOfRange(quantity))?;

        let Some(line) = self
            .items
            .iter_mut()
            .find(|item| &item.product_id == product)
        else {
            return Ok(QuantityChange::NotFound);
        };

        line.quantity = quantity;

        Ok(QuantityChange::Updated(quantity))
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Sum of unit price times quantity across all lines, in minor units.
    pub fn total_amount(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, item| acc.saturating_add(item.line_total()))
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the cart, returning its lines.
    pub fn into_lines(self) -> Vec<CartLineItem> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use testresult::TestResult;

    use crate::fixtures::{snapshot, sold_out};

    use super::*;

    fn watch(id: &str) -> ProductId {
        ProductId::new(id)
    }

    #[test]
    fn adding_new_product_appends_line() -> TestResult {
        let mut cart = Cart::new();

        let outcome = cart.add(snapshot("watch-1", 179_99), Timestamp::now())?;

        assert_eq!(outcome, AddOutcome::Inserted);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 1);

        Ok(())
    }

    #[test]
    fn adding_same_product_merges_into_one_line() -> TestResult {
        let mut cart = Cart::new();

        for _ in 0..5 {
            cart.add(snapshot("watch-1", 179_99), Timestamp::now())?;
        }

        let line = cart.line(&watch("watch-1")).ok_or("missing line")?;

        assert_eq!(cart.len(), 1);
        assert_eq!(line.quantity.get(), 5);

        Ok(())
    }

    #[test]
    fn merging_keeps_original_snapshot() -> TestResult {
        let mut cart = Cart::new();

        cart.add(snapshot("watch-1", 179_99), Timestamp::now())?;
        let first_id = cart.line(&watch("watch-1")).ok_or("missing line")?.id.clone();

        let outcome = cart.add(snapshot("watch-1", 199_99), Timestamp::now())?;
        let line = cart.line(&watch("watch-1")).ok_or("missing line")?;

        assert!(matches!(outcome, AddOutcome::Merged(q) if q.get() == 2));
        assert_eq!(line.product.price, 179_99);
        assert_eq!(line.id, first_id);

        Ok(())
    }

    #[test]
    fn out_of_stock_product_is_rejected() {
        let mut cart = Cart::new();

        let result = cart.add(sold_out("watch-9", 250_00), Timestamp::now());

        assert_eq!(result, Err(CartError::OutOfStock(watch("watch-9"))));
        assert!(cart.is_empty());
    }

    #[test]
    fn insertion_order_is_preserved() -> TestResult {
        let mut cart = Cart::new();

        cart.add(snapshot("b", 1_00), Timestamp::now())?;
        cart.add(snapshot("a", 2_00), Timestamp::now())?;
        cart.add(snapshot("b", 1_00), Timestamp::now())?;

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();

        assert_eq!(ids, vec!["b", "a"]);

        Ok(())
    }

    #[test]
    fn remove_is_idempotent() -> TestResult {
        let mut cart = Cart::new();
        cart.add(snapshot("watch-1", 179_99), Timestamp::now())?;
        cart.add(snapshot("watch-2", 99_00), Timestamp::now())?;

        assert!(cart.remove(&watch("watch-1")));
        let after_first = cart.clone();

        assert!(!cart.remove(&watch("watch-1")));
        assert_eq!(cart, after_first);
        assert!(cart.line(&watch("watch-1")).is_none());

        Ok(())
    }

    #[test]
    fn update_quantity_sets_value() -> TestResult {
        let mut cart = Cart::new();
        cart.add(snapshot("watch-1", 179_99), Timestamp::now())?;

        let change = cart.update_quantity(&watch("watch-1"), 7)?;

        assert!(matches!(change, QuantityChange::Updated(q) if q.get() == 7));
        assert_eq!(cart.item_count(), 7);

        Ok(())
    }

    #[test]
    fn update_quantity_zero_or_negative_removes() -> TestResult {
        for quantity in [0, -5] {
            let mut cart = Cart::new();
            cart.add(snapshot("watch-1", 179_99), Timestamp::now())?;

            let change = cart.update_quantity(&watch("watch-1"), quantity)?;

            assert_eq!(change, QuantityChange::Removed);
            assert!(cart.line(&watch("watch-1")).is_none());
        }

        Ok(())
    }

    #[test]
    fn update_quantity_unknown_product_is_noop() -> TestResult {
        let mut cart = Cart::new();
        cart.add(snapshot("watch-1", 179_99), Timestamp::now())?;
        let before = cart.clone();

        assert_eq!(
            cart.update_quantity(&watch("watch-2"), 3)?,
            QuantityChange::NotFound
        );
        assert_eq!(
            cart.update_quantity(&watch("watch-2"), 0)?,
            QuantityChange::NotFound
        );
        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn update_quantity_rejects_unrepresentable_values() -> TestResult {
        let mut cart = Cart::new();
        cart.add(snapshot("watch-1", 179_99), Timestamp::now())?;

        let result = cart.update_quantity(&watch("watch-1"), i64::MAX);

        assert_eq!(result, Err(CartError::QuantityOutOfRange(i64::MAX)));

        Ok(())
    }

    #[test]
    fn clear_empties_cart() -> TestResult {
        let mut cart = Cart::new();
        cart.add(snapshot("watch-1", 179_99), Timestamp::now())?;
        cart.add(snapshot("watch-2", 99_00), Timestamp::now())?;

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_amount(), 0);

        Ok(())
    }

    #[test]
    fn two_adds_total_matches_price_times_two() -> TestResult {
        let mut cart = Cart::new();

        cart.add(snapshot("watch-1", 179_99), Timestamp::now())?;
        cart.add(snapshot("watch-1", 179_99), Timestamp::now())?;

        assert_eq!(cart.total_amount(), 359_98);

        Ok(())
    }

    #[test]
    fn from_lines_rejects_duplicate_products() {
        let lines = vec![
            CartLineItem::new(snapshot("watch-1", 179_99), Timestamp::now()),
            CartLineItem::new(snapshot("watch-1", 179_99), Timestamp::now()),
        ];

        let result = Cart::from_lines(lines);

        assert_eq!(result, Err(CartError::DuplicateProduct(watch("watch-1"))));
    }

    #[test]
    fn from_lines_keeps_order() -> TestResult {
        let lines = vec![
            CartLineItem::new(snapshot("watch-2", 1_00), Timestamp::now()),
            CartLineItem::new(snapshot("watch-1", 2_00), Timestamp::now()),
        ];

        let cart = Cart::from_lines(lines.clone())?;

        assert_eq!(cart.into_lines(), lines);

        Ok(())
    }

    fn arb_lines() -> impl Strategy<Value = Vec<(i64, u32)>> {
        prop::collection::vec((0_i64..1_000_000, 1_u32..50), 0..20)
    }

    proptest! {
        #[test]
        fn totals_match_line_sums(specs in arb_lines()) {
            let lines: Vec<CartLineItem> = specs
                .iter()
                .enumerate()
                .map(|(i, (price, quantity))| {
                    let mut line = CartLineItem::new(snapshot(&format!("p{i}"), *price), Timestamp::now());
                    line.quantity = NonZeroU32::new(*quantity).unwrap_or(NonZeroU32::MIN);
                    line
                })
                .collect();

            let cart = Cart::from_lines(lines)?;

            let expected_count: u64 = specs.iter().map(|(_, q)| u64::from(*q)).sum();
            let expected_total: i64 = specs.iter().map(|(p, q)| p * i64::from(*q)).sum();

            prop_assert_eq!(cart.item_count(), expected_count);
            prop_assert_eq!(cart.total_amount(), expected_total);
        }

        #[test]
        fn repeated_adds_keep_one_line(adds in 1_usize..40) {
            let mut cart = Cart::new();

            for _ in 0..adds {
                cart.add(snapshot("watch-1", 179_99), Timestamp::now())?;
            }

            prop_assert_eq!(cart.len(), 1);
            prop_assert_eq!(cart.item_count(), adds as u64);
        }
    }
}
