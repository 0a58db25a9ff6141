//! Shopping cart module.
//!
//! [`Cart`] is the in-memory line list with its invariants; [`CartStore`]
//! owns a cart, keeps it in sync with a storage slot and reports what
//! changed through [`CartEvent`]s.

mod cart;
mod events;
mod line_item;
mod snapshot;
mod store;

pub use cart::{Cart, QuantityChange, MAX_QUANTITY_PER_ITEM};
pub use events::{CartEvent, CartListener, Notice, Severity};
pub use line_item::{LineItem, LineKey, NewLineItem};
pub use snapshot::{SnapshotError, SnapshotItem};
pub use store::{CartStore, Receipt, DEFAULT_CART_SLOT, MAX_PENDING_EVENTS};
