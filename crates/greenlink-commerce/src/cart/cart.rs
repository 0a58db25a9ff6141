//! The in-memory cart.

use crate::cart::{LineItem, LineKey, NewLineItem};
use crate::error::CommerceError;
use crate::money::{Currency, Money, MAX_UNIT_PRICE_MINOR};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// Outcome of [`Cart::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now has this quantity.
    Updated(u32),
    /// The quantity dropped to zero or below and the line was removed.
    Removed,
    /// No line has that key.
    NotFound,
}

/// A shopping cart: an ordered list of line items, unique by key.
///
/// Every line has a quantity of at least 1. Totals are always derived from
/// the lines and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    currency: Currency,
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            items: Vec::new(),
        }
    }

    /// Build a cart from lines that were already validated.
    pub(crate) fn from_items(currency: Currency, items: Vec<LineItem>) -> Self {
        Self { currency, items }
    }

    /// Currency every line is priced in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Add one unit of a product.
    ///
    /// An existing line with the same key gains one unit and keeps the price
    /// and image it was first added with. An item with a product id also
    /// picks up an id-less line of the same name, as left by carts saved
    /// before products carried ids; that line takes the id. Otherwise a new
    /// line with quantity 1 is appended. Returns the line's new quantity.
    pub fn add_item(&mut self, item: NewLineItem) -> Result<u32, CommerceError> {
        self.check_price(&item.unit_price)?;

        let position = self
            .position(&item.key())
            .or_else(|| self.unkeyed_position(&item));
        if let Some(position) = position {
            let existing = &mut self.items[position];
            let new_quantity = existing.quantity.saturating_add(1);
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    i64::from(new_quantity),
                    i64::from(MAX_QUANTITY_PER_ITEM),
                ));
            }
            if existing.id.is_none() {
                existing.id = item.id;
            }
            existing.quantity = new_quantity;
            return Ok(new_quantity);
        }

        self.items.push(LineItem::first(item));
        Ok(1)
    }

    /// Remove the line with `key`. Returns whether a line was removed.
    pub fn remove_item(&mut self, key: &LineKey) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| !i.matches(key));
        self.items.len() < len_before
    }

    /// Add `delta` (possibly negative) to a line's quantity.
    ///
    /// A result of zero or below removes the line.
    pub fn update_quantity(
        &mut self,
        key: &LineKey,
        delta: i64,
    ) -> Result<QuantityChange, CommerceError> {
        let Some(position) = self.position(key) else {
            return Ok(QuantityChange::NotFound);
        };

        let current = i64::from(self.items[position].quantity);
        let new_quantity = current.saturating_add(delta);
        if new_quantity <= 0 {
            self.items.remove(position);
            return Ok(QuantityChange::Removed);
        }
        if new_quantity > i64::from(MAX_QUANTITY_PER_ITEM) {
            return Err(CommerceError::QuantityExceedsLimit(
                new_quantity,
                i64::from(MAX_QUANTITY_PER_ITEM),
            ));
        }

        // Bounded by MAX_QUANTITY_PER_ITEM above.
        let new_quantity = new_quantity as u32;
        self.items[position].quantity = new_quantity;
        Ok(QuantityChange::Updated(new_quantity))
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Get number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by key.
    pub fn get(&self, key: &LineKey) -> Option<&LineItem> {
        self.items.iter().find(|i| i.matches(key))
    }

    /// Sum of unit price times quantity over all lines.
    ///
    /// Saturates at the largest representable amount; use
    /// [`Cart::try_total`] to detect that case.
    pub fn total(&self) -> Money {
        let sum: i128 = self
            .items
            .iter()
            .map(|i| i128::from(i.unit_price.amount_cents) * i128::from(i.quantity))
            .sum();
        Money::new(i64::try_from(sum).unwrap_or(i64::MAX), self.currency)
    }

    /// Sum of unit price times quantity, failing on overflow.
    pub fn try_total(&self) -> Result<Money, CommerceError> {
        let lines = self
            .items
            .iter()
            .map(|i| i.line_total().ok_or(CommerceError::Overflow))
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(lines.iter(), self.currency).ok_or(CommerceError::Overflow)
    }

    fn position(&self, key: &LineKey) -> Option<usize> {
        self.items.iter().position(|i| i.matches(key))
    }

    fn unkeyed_position(&self, item: &NewLineItem) -> Option<usize> {
        item.id.as_ref()?;
        self.items
            .iter()
            .position(|i| i.id.is_none() && i.name == item.name)
    }

    fn check_price(&self, price: &Money) -> Result<(), CommerceError> {
        if price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: price.currency.code().to_string(),
            });
        }
        if price.is_negative() || price.amount_cents > MAX_UNIT_PRICE_MINOR {
            return Err(CommerceError::InvalidPrice(price.display_amount()));
        }
        Ok(())
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eur(cents: i64) -> Money {
        Money::new(cents, Currency::EUR)
    }

    fn item(name: &str, cents: i64) -> NewLineItem {
        NewLineItem::new(name, eur(cents), format!("{}.jpg", name))
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::EUR);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), eur(0));
    }

    #[test]
    fn test_add_distinct_items() {
        let mut cart = Cart::default();
        cart.add_item(item("A", 1000)).unwrap();
        cart.add_item(item("B", 250)).unwrap();
        cart.add_item(item("C", 1)).unwrap();

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.unique_item_count(), 3);
        assert_eq!(cart.total(), eur(1251));
    }

    #[test]
    fn test_add_same_item_keeps_first_price_and_image() {
        let mut cart = Cart::default();
        cart.add_item(NewLineItem::new("Tote Bag", eur(1250), "img1"))
            .unwrap();
        let quantity = cart
            .add_item(NewLineItem::new("Tote Bag", eur(9900), "other"))
            .unwrap();

        assert_eq!(quantity, 2);
        assert_eq!(cart.unique_item_count(), 1);
        let line = cart.get(&LineKey::name("Tote Bag")).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price, eur(1250));
        assert_eq!(line.image, "img1");
    }

    #[test]
    fn test_items_with_ids_do_not_collide_on_name() {
        let mut cart = Cart::default();
        cart.add_item(item("Seeds", 300).with_id("seeds-basil")).unwrap();
        cart.add_item(item("Seeds", 350).with_id("seeds-mint")).unwrap();

        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.total(), eur(650));
        assert!(cart.get(&LineKey::name("Seeds")).is_none());
        assert!(cart.get(&LineKey::id("seeds-mint")).is_some());
    }

    #[test]
    fn test_name_key_does_not_fold_into_product_with_that_id() {
        let mut cart = Cart::default();
        cart.add_item(item("Ceramic Mug", 800).with_id("Tote Bag")).unwrap();
        cart.add_item(item("Tote Bag", 1250)).unwrap();

        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.get(&LineKey::id("Tote Bag")).unwrap().quantity, 1);
        assert_eq!(cart.get(&LineKey::name("Tote Bag")).unwrap().quantity, 1);
        assert_eq!(cart.total(), eur(2050));

        assert!(cart.remove_item(&LineKey::name("Tote Bag")));
        assert_eq!(cart.get(&LineKey::id("Tote Bag")).unwrap().name, "Ceramic Mug");
    }

    #[test]
    fn test_product_id_adopts_name_keyed_line() {
        let mut cart = Cart::default();
        cart.add_item(item("Mug", 800)).unwrap();

        let quantity = cart.add_item(item("Mug", 800).with_id("mug")).unwrap();
        assert_eq!(quantity, 2);
        assert_eq!(cart.unique_item_count(), 1);
        assert!(cart.get(&LineKey::name("Mug")).is_none());
        assert_eq!(cart.get(&LineKey::id("mug")).unwrap().quantity, 2);

        // Once adopted, the line belongs to that id only.
        cart.add_item(item("Mug", 800).with_id("mug-large")).unwrap();
        assert_eq!(cart.unique_item_count(), 2);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::default();
        cart.add_item(item("Mug", 800)).unwrap();

        assert_eq!(
            cart.update_quantity(&LineKey::name("Mug"), 4).unwrap(),
            QuantityChange::Updated(5)
        );
        assert_eq!(cart.item_count(), 5);
        assert_eq!(
            cart.update_quantity(&LineKey::name("Mug"), -2).unwrap(),
            QuantityChange::Updated(3)
        );
    }

    #[test]
    fn test_update_to_zero_removes() {
        let mut cart = Cart::default();
        cart.add_item(item("Mug", 800)).unwrap();
        cart.add_item(item("Mug", 800)).unwrap();

        assert_eq!(
            cart.update_quantity(&LineKey::name("Mug"), -2).unwrap(),
            QuantityChange::Removed
        );
        assert!(cart.get(&LineKey::name("Mug")).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_far_below_zero_removes() {
        let mut cart = Cart::default();
        cart.add_item(item("Mug", 800)).unwrap();
        assert_eq!(
            cart.update_quantity(&LineKey::name("Mug"), i64::MIN).unwrap(),
            QuantityChange::Removed
        );
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut cart = Cart::default();
        cart.add_item(item("Mug", 800)).unwrap();
        assert_eq!(
            cart.update_quantity(&LineKey::name("Lamp"), 1).unwrap(),
            QuantityChange::NotFound
        );
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::default();
        cart.add_item(item("Mug", 800)).unwrap();
        assert!(!cart.remove_item(&LineKey::name("Lamp")));
        assert!(cart.remove_item(&LineKey::name("Mug")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_limit() {
        let mut cart = Cart::default();
        cart.add_item(item("Mug", 800)).unwrap();
        let result = cart.update_quantity(&LineKey::name("Mug"), i64::from(MAX_QUANTITY_PER_ITEM));
        assert!(matches!(
            result,
            Err(CommerceError::QuantityExceedsLimit(_, _))
        ));
        assert_eq!(cart.get(&LineKey::name("Mug")).unwrap().quantity, 1);
    }

    #[test]
    fn test_rejects_foreign_currency_and_negative_price() {
        let mut cart = Cart::new(Currency::EUR);
        let usd = NewLineItem::new("Mug", Money::new(800, Currency::USD), "");
        assert!(matches!(
            cart.add_item(usd),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
        assert!(matches!(
            cart.add_item(item("Mug", -1)),
            Err(CommerceError::InvalidPrice(_))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_matches_try_total() {
        let mut cart = Cart::default();
        cart.add_item(item("Tote Bag", 1250)).unwrap();
        cart.add_item(item("Tote Bag", 1250)).unwrap();
        cart.add_item(item("Mug", 800)).unwrap();

        assert_eq!(cart.total(), eur(3300));
        assert_eq!(cart.try_total().unwrap(), eur(3300));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::default();
        cart.add_item(item("Mug", 800)).unwrap();
        cart.clear();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), eur(0));
    }
}
