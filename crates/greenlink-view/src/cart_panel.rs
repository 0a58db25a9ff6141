//! What the cart badge and cart modal display.

use greenlink_commerce::cart::{Cart, LineItem, LineKey};

/// One row in the cart modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    /// Key passed back to quantity and remove buttons. Its text form is
    /// what a rendered button carries.
    pub key: LineKey,
    pub name: String,
    pub image: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl CartRow {
    fn from_line(line: &LineItem) -> Self {
        let line_total = line
            .line_total()
            .map(|total| total.display())
            .unwrap_or_else(|| "-".to_string());
        Self {
            key: line.key(),
            name: line.name.clone(),
            image: line.image.clone(),
            unit_price: line.unit_price.display(),
            quantity: line.quantity,
            line_total,
        }
    }
}

/// Render model for the cart badges and modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanel {
    /// Shared by the desktop and mobile badges.
    pub badge: u64,
    pub rows: Vec<CartRow>,
    /// Summary total; `None` when the cart is empty and the summary is hidden.
    pub total: Option<String>,
}

impl CartPanel {
    pub fn from_cart(cart: &Cart) -> Self {
        let rows: Vec<CartRow> = cart.items().iter().map(CartRow::from_line).collect();
        let total = (!rows.is_empty()).then(|| cart.total().display());
        Self {
            badge: cart.item_count(),
            rows,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
