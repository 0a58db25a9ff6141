//! Products as shown on the page.

use std::collections::HashSet;
use std::time::Duration;

use crate::cart::NewLineItem;
use crate::catalog::{CategoryFilter, Visibility};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product card on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub category: CategoryId,
    pub description: String,
}

impl Product {
    /// The line to add when this product's "add to cart" button is used.
    pub fn to_line_item(&self) -> NewLineItem {
        NewLineItem::new(self.name.clone(), self.price, self.image.clone()).with_id(self.id.clone())
    }
}

/// A product as written in a catalog file, with a decimal price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// The products on offer, in page order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from records, pricing them in `currency`.
    ///
    /// Fails on an invalid price or a repeated product id.
    pub fn from_records(records: Vec<ProductRecord>, currency: Currency) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        let mut products = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.id.clone()) {
                return Err(CommerceError::SerializationError(format!(
                    "duplicate product id {}",
                    record.id
                )));
            }
            products.push(Product {
                price: Money::price_from_decimal(record.price, currency)?,
                id: ProductId::new(record.id),
                name: record.name,
                image: record.image,
                category: CategoryId::new(record.category),
                description: record.description,
            });
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of [`ProductRecord`]s.
    pub fn from_json(text: &str, currency: Currency) -> Result<Self, CommerceError> {
        let records: Vec<ProductRecord> = serde_json::from_str(text)?;
        Self::from_records(records, currency)
    }

    /// All products in page order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look a product up by id.
    pub fn get(&self, id: &str) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| p.id.as_str() == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&CategoryId> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| &p.category)
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Apply a category filter to the whole catalog.
    pub fn filter(&self, filter: &CategoryFilter, stagger: Duration) -> Vec<Visibility<'_>> {
        filter.apply(&self.products, stagger)
    }
}
