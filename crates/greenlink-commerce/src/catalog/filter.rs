//! Category filtering for the product grid.

use std::str::FromStr;
use std::time::Duration;

use crate::catalog::Product;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Delay between successive product reveals after a filter change.
pub const DEFAULT_REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// Which products the grid shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(CategoryId),
}

impl CategoryFilter {
    /// Check whether a product passes the filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => &product.category == category,
        }
    }

    /// Decide visibility for every product, in order.
    ///
    /// A shown product at position `i` in the full list is revealed after
    /// `i * stagger`; hidden products are hidden at once.
    pub fn apply<'a>(&self, products: &'a [Product], stagger: Duration) -> Vec<Visibility<'a>> {
        products
            .iter()
            .enumerate()
            .map(|(index, product)| {
                let shown = self.matches(product);
                let reveal_after = shown.then(|| stagger * index as u32);
                Visibility {
                    product,
                    shown,
                    reveal_after,
                }
            })
            .collect()
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    /// `"all"` (any case) selects everything; anything else is a category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") || s.is_empty() {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Category(CategoryId::new(s)))
        }
    }
}

/// Filter outcome for one product card.
#[derive(Debug, Clone, PartialEq)]
pub struct Visibility<'a> {
    pub product: &'a Product,
    pub shown: bool,
    /// When to play the reveal animation; `None` for hidden cards.
    pub reveal_after: Option<Duration>,
}
