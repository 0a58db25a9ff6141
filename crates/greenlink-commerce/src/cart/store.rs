//! The cart store: a cart bound to a storage slot.

use std::collections::VecDeque;
use std::fmt;

use greenlink_cache::{Cache, KvBackend};

use crate::cart::snapshot::{self, SnapshotError};
use crate::cart::{
    Cart, CartEvent, CartListener, LineItem, LineKey, NewLineItem, Notice, QuantityChange,
};
use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// Storage slot the cart is persisted under by default.
pub const DEFAULT_CART_SLOT: &str = "greenlink-cart";

/// Events kept for [`CartStore::take_events`]; older ones are dropped first.
pub const MAX_PENDING_EVENTS: usize = 64;

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// Total charged, computed before the cart was cleared.
    pub total: Money,
    /// Number of units ordered.
    pub item_count: u64,
    /// Lines as they were at checkout.
    pub lines: Vec<LineItem>,
}

/// Owns the authoritative cart and keeps the storage slot in sync.
///
/// Every mutation writes the full cart to the slot, replacing the previous
/// snapshot, and then reports [`CartEvent`]s. Events go to registered
/// listeners immediately and are also queued for [`CartStore::take_events`],
/// so a view can either subscribe or drain the queue after each call. The
/// queue holds at most [`MAX_PENDING_EVENTS`]; a caller that only subscribes
/// can ignore it.
pub struct CartStore<B> {
    cache: Cache<B>,
    slot: String,
    cart: Cart,
    listeners: Vec<Box<dyn CartListener>>,
    pending: VecDeque<CartEvent>,
}

impl<B: KvBackend> CartStore<B> {
    /// Load the cart persisted in `slot`.
    ///
    /// A missing slot gives an empty cart. An unreadable or malformed
    /// snapshot also gives an empty cart; the problem is logged and queued
    /// as [`CartEvent::SnapshotDiscarded`]. This never fails.
    pub fn load(cache: Cache<B>, slot: impl Into<String>, currency: Currency) -> Self {
        let slot = slot.into();
        let mut pending = VecDeque::new();

        let cart = match read_snapshot(&cache, &slot, currency) {
            Ok(Some(items)) => {
                tracing::debug!(slot = %slot, lines = items.len(), "loaded cart snapshot");
                Cart::from_items(currency, items)
            }
            Ok(None) => Cart::new(currency),
            Err(err) => {
                tracing::warn!(slot = %slot, error = %err, "discarding cart snapshot");
                pending.push_back(CartEvent::SnapshotDiscarded {
                    reason: err.to_string(),
                });
                Cart::new(currency)
            }
        };

        Self {
            cache,
            slot,
            cart,
            listeners: Vec::new(),
            pending,
        }
    }

    /// Register a listener for every later event.
    pub fn subscribe(&mut self, listener: impl CartListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Drain events queued since the last call.
    pub fn take_events(&mut self) -> Vec<CartEvent> {
        self.pending.drain(..).collect()
    }

    /// Add one unit of a product and persist.
    ///
    /// Returns the line's new quantity.
    pub fn add_item(&mut self, item: NewLineItem) -> Result<u32, CommerceError> {
        let key = item.key();
        let name = item.name.clone();
        let quantity = self.cart.add_item(item)?;
        tracing::debug!(key = %key, quantity, "added to cart");

        let persisted = self.persist();
        self.emit(CartEvent::Changed);
        self.emit(CartEvent::Notice(Notice::success(format!(
            "{} added to cart",
            name
        ))));
        self.emit(CartEvent::ItemAdded { key, quantity });
        persisted.map(|()| quantity)
    }

    /// Convenience form of [`CartStore::add_item`] for name-keyed products.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Result<u32, CommerceError> {
        self.add_item(NewLineItem::new(name, price, image))
    }

    /// Remove the line with `key`.
    ///
    /// Unknown keys are ignored: nothing is written and nothing is emitted.
    pub fn remove_item(&mut self, key: &LineKey) -> Result<bool, CommerceError> {
        if !self.cart.remove_item(key) {
            tracing::debug!(key = %key, "remove ignored, no such line");
            return Ok(false);
        }
        self.after_removal()?;
        Ok(true)
    }

    /// Add `delta` to a line's quantity; zero or below removes the line.
    pub fn update_quantity(
        &mut self,
        key: &LineKey,
        delta: i64,
    ) -> Result<QuantityChange, CommerceError> {
        let change = self.cart.update_quantity(key, delta)?;
        match change {
            QuantityChange::NotFound => {
                tracing::debug!(key = %key, "quantity update ignored, no such line");
            }
            QuantityChange::Removed => self.after_removal()?,
            QuantityChange::Updated(_) => {
                let persisted = self.persist();
                self.emit(CartEvent::Changed);
                persisted?;
            }
        }
        Ok(change)
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.cart.clear();
        let persisted = self.persist();
        self.emit(CartEvent::Changed);
        self.emit(CartEvent::Notice(Notice::success("Cart cleared")));
        persisted
    }

    /// Simulate placing an order for the current cart.
    ///
    /// An empty cart is refused with [`CommerceError::EmptyCart`] and an
    /// error notice, leaving everything unchanged. Otherwise the order is
    /// confirmed with the pre-checkout total, then the cart is cleared
    /// exactly as [`CartStore::clear`] does, notice included.
    pub fn checkout(&mut self) -> Result<Receipt, CommerceError> {
        if self.cart.is_empty() {
            self.emit(CartEvent::Notice(Notice::error("Your cart is empty")));
            return Err(CommerceError::EmptyCart);
        }

        let receipt = Receipt {
            total: self.cart.try_total()?,
            item_count: self.cart.item_count(),
            lines: self.cart.items().to_vec(),
        };
        tracing::info!(
            total = %receipt.total,
            items = receipt.item_count,
            "checkout confirmed"
        );
        self.emit(CartEvent::Notice(Notice::success(format!(
            "Order of {} confirmed!",
            receipt.total
        ))));
        self.clear()?;
        Ok(receipt)
    }

    /// Sum of unit price times quantity.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Sum of quantities. Both badge counters read this.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Get a line by key.
    pub fn get(&self, key: &LineKey) -> Option<&LineItem> {
        self.cart.get(key)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Borrow the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Currency the cart is priced in.
    pub fn currency(&self) -> Currency {
        self.cart.currency()
    }

    /// Name of the storage slot.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    fn after_removal(&mut self) -> Result<(), CommerceError> {
        let persisted = self.persist();
        self.emit(CartEvent::Changed);
        self.emit(CartEvent::Notice(Notice::success("Item removed from cart")));
        persisted
    }

    /// Write the whole cart to the slot. A failure is logged and emitted;
    /// the in-memory cart stays authoritative.
    fn persist(&mut self) -> Result<(), CommerceError> {
        let items = snapshot::encode(&self.cart);
        match self.cache.set(&self.slot, &items) {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::error!(slot = %self.slot, error = %err, "failed to persist cart");
                self.emit(CartEvent::PersistFailed {
                    error: err.to_string(),
                });
                Err(err.into())
            }
        }
    }

    fn emit(&mut self, event: CartEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event, &self.cart);
        }
        if self.pending.len() == MAX_PENDING_EVENTS {
            self.pending.pop_front();
        }
        self.pending.push_back(event);
    }
}

impl<B> fmt::Debug for CartStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("slot", &self.slot)
            .field("cart", &self.cart)
            .field("listeners", &self.listeners.len())
            .field("pending", &self.pending.len())
            .finish()
    }
}

fn read_snapshot<B: KvBackend>(
    cache: &Cache<B>,
    slot: &str,
    currency: Currency,
) -> Result<Option<Vec<LineItem>>, SnapshotError> {
    let text = cache
        .get_raw(slot)
        .map_err(|e| SnapshotError::Unreadable(e.to_string()))?;
    text.map(|text| snapshot::decode(&text, currency)).transpose()
}
