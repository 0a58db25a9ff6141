//! Cart, catalog and money types for the GreenLink storefront.
//!
//! - **Cart**: line items unique by key, a [`CartStore`] that persists the
//!   cart to a storage slot after every change and reports [`CartEvent`]s
//! - **Catalog**: products and category filtering
//! - **Money**: integer minor-unit amounts with a currency
//!
//! # Example
//!
//! ```
//! use greenlink_cache::{Cache, MemoryBackend};
//! use greenlink_commerce::prelude::*;
//!
//! let mut store = CartStore::load(
//!     Cache::new(MemoryBackend::new()),
//!     DEFAULT_CART_SLOT,
//!     Currency::EUR,
//! );
//! store.add("Tote Bag", Money::new(1250, Currency::EUR), "img1").unwrap();
//! store.add("Tote Bag", Money::new(1250, Currency::EUR), "img1").unwrap();
//! store.add("Mug", Money::new(800, Currency::EUR), "img2").unwrap();
//!
//! assert_eq!(store.item_count(), 3);
//! assert_eq!(store.total().display(), "33.00 \u{20ac}");
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;

pub use error::CommerceError;
pub use ids::{CategoryId, ProductId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{CategoryId, ProductId};
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{
        Cart, CartEvent, CartListener, CartStore, LineItem, LineKey, NewLineItem, Notice, QuantityChange,
        Receipt, Severity, DEFAULT_CART_SLOT,
    };

    // Catalog
    pub use crate::catalog::{Catalog, CategoryFilter, Product, Visibility};
}
