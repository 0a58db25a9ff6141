//! Product catalog and category filtering.

mod filter;
mod product;

pub use filter::{CategoryFilter, Visibility, DEFAULT_REVEAL_STAGGER};
pub use product::{Catalog, Product, ProductRecord};
