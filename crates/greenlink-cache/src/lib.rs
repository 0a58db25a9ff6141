//! Key-value storage slots for GreenLink.
//!
//! A storage slot is a single named key holding a serialized value, the
//! way a browser keeps page state in local storage. This crate provides a
//! small [`KvBackend`] trait with two backends and a typed [`Cache`] that
//! does the JSON serialization on top.
//!
//! # Example
//!
//! ```
//! use greenlink_cache::{Cache, MemoryBackend};
//!
//! let cache = Cache::new(MemoryBackend::new());
//! cache.set("greenlink-cart", &vec!["Tote Bag".to_string()]).unwrap();
//!
//! let items: Option<Vec<String>> = cache.get("greenlink-cart").unwrap();
//! assert_eq!(items, Some(vec!["Tote Bag".to_string()]));
//! ```

mod backend;
mod cache;
mod error;

pub use backend::{validate_key, FileBackend, KvBackend, MemoryBackend};
pub use cache::Cache;
pub use error::CacheError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileBackend, KvBackend, MemoryBackend};
}
