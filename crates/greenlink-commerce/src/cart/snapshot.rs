//! Persisted cart snapshot format.
//!
//! The slot holds a JSON array of
//! `{"name": string, "price": number, "image": string, "quantity": integer}`
//! objects, with an optional `"id"` string. There is no version field; any
//! other shape is rejected as a whole.

use std::collections::HashSet;

use crate::cart::{Cart, LineItem, LineKey, MAX_QUANTITY_PER_ITEM};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One line as stored in the slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub quantity: u32,
}

impl From<&LineItem> for SnapshotItem {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.unit_price.to_decimal(),
            image: item.image.clone(),
            quantity: item.quantity,
        }
    }
}

/// Why a stored snapshot was rejected.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The slot could not be read as text.
    #[error("unreadable slot: {0}")]
    Unreadable(String),

    /// The text is not a JSON array of line objects.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A line breaks a cart invariant.
    #[error("invalid line {index}: {reason}")]
    InvalidLine { index: usize, reason: String },

    /// Two lines share a key.
    #[error("duplicate line key: {0}")]
    DuplicateKey(String),
}

/// Serialize a cart's lines in snapshot form.
pub(crate) fn encode(cart: &Cart) -> Vec<SnapshotItem> {
    cart.items().iter().map(SnapshotItem::from).collect()
}

/// Parse snapshot text into lines priced in `currency`.
pub(crate) fn decode(text: &str, currency: Currency) -> Result<Vec<LineItem>, SnapshotError> {
    let stored: Vec<SnapshotItem> = serde_json::from_str(text)?;

    let mut seen: HashSet<LineKey> = HashSet::with_capacity(stored.len());
    let mut items = Vec::with_capacity(stored.len());
    for (index, entry) in stored.into_iter().enumerate() {
        let invalid = |reason: String| SnapshotError::InvalidLine { index, reason };

        if entry.name.is_empty() {
            return Err(invalid("empty name".to_string()));
        }
        if entry.quantity == 0 || entry.quantity > MAX_QUANTITY_PER_ITEM {
            return Err(invalid(format!("quantity {}", entry.quantity)));
        }
        let unit_price = Money::price_from_decimal(entry.price, currency)
            .map_err(|e| invalid(e.to_string()))?;

        let item = LineItem {
            id: entry.id,
            name: entry.name,
            unit_price,
            image: entry.image,
            quantity: entry.quantity,
        };
        let key = item.key();
        if seen.contains(&key) {
            return Err(SnapshotError::DuplicateKey(key.to_string()));
        }
        seen.insert(key);
        items.push(item);
    }
    Ok(items)
}
