//! Line item types.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

const ID_PREFIX: &str = "id:";
const NAME_PREFIX: &str = "name:";

/// Identity of a cart line.
///
/// Lines added with a product id are keyed by the id, lines without one by
/// their name. An id and a name never match each other, even when the
/// strings are equal.
///
/// The text form is `id:<product-id>` for ids and the bare name for names.
/// Names that themselves start with `id:` or `name:` are written as
/// `name:<name>`, so parsing the text form always gives the key back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LineKey {
    Id(ProductId),
    Name(String),
}

impl LineKey {
    pub fn id(id: impl Into<ProductId>) -> Self {
        Self::Id(id.into())
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}{}", ID_PREFIX, id),
            Self::Name(name) if name.starts_with(ID_PREFIX) || name.starts_with(NAME_PREFIX) => {
                write!(f, "{}{}", NAME_PREFIX, name)
            }
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl FromStr for LineKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(id) = s.strip_prefix(ID_PREFIX) {
            Ok(Self::id(id))
        } else if let Some(name) = s.strip_prefix(NAME_PREFIX) {
            Ok(Self::name(name))
        } else {
            Ok(Self::name(s))
        }
    }
}

/// A product being put into the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLineItem {
    /// Stable product identifier; when absent the name is the key.
    pub id: Option<ProductId>,
    /// Product name (display label).
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Image URL, used only for display.
    pub image: String,
}

impl NewLineItem {
    /// Describe a product keyed by its name.
    pub fn new(name: impl Into<String>, unit_price: Money, image: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            unit_price,
            image: image.into(),
        }
    }

    /// Key the line by a stable product id instead of the name.
    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The key the cart will use for this product.
    pub fn key(&self) -> LineKey {
        match &self.id {
            Some(id) => LineKey::Id(id.clone()),
            None => LineKey::Name(self.name.clone()),
        }
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable product identifier, if the product has one.
    pub id: Option<ProductId>,
    /// Product name.
    pub name: String,
    /// Unit price, fixed when the line was first added.
    pub unit_price: Money,
    /// Image URL.
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Start a line with quantity 1.
    pub(crate) fn first(item: NewLineItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            unit_price: item.unit_price,
            image: item.image,
            quantity: 1,
        }
    }

    /// The identity key: the product id if present, the name otherwise.
    pub fn key(&self) -> LineKey {
        match &self.id {
            Some(id) => LineKey::Id(id.clone()),
            None => LineKey::Name(self.name.clone()),
        }
    }

    /// Check whether this line is the one `key` names.
    pub fn matches(&self, key: &LineKey) -> bool {
        match (&self.id, key) {
            (Some(id), LineKey::Id(wanted)) => id == wanted,
            (None, LineKey::Name(wanted)) => self.name == *wanted,
            _ => false,
        }
    }

    /// Unit price times quantity.
    ///
    /// Returns `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.try_multiply(i64::from(self.quantity))
    }
}
