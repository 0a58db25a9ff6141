//! Modal, mobile menu and navigation state.

use greenlink_commerce::catalog::Product;

/// Contents of the product detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    pub product_id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub description: String,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.display(),
            image: product.image.clone(),
            category: product.category.to_string(),
            description: product.description.clone(),
        }
    }
}

/// Which overlays are open and which section is highlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    product_modal: Option<ProductDetail>,
    cart_modal: bool,
    mobile_menu: bool,
    active_section: Option<String>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_product(&mut self, detail: ProductDetail) {
        self.product_modal = Some(detail);
    }

    pub fn close_product(&mut self) -> Option<ProductDetail> {
        self.product_modal.take()
    }

    pub fn product(&self) -> Option<&ProductDetail> {
        self.product_modal.as_ref()
    }

    pub fn open_cart(&mut self) {
        self.cart_modal = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_modal = false;
    }

    pub fn cart_open(&self) -> bool {
        self.cart_modal
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu = !self.mobile_menu;
    }

    pub fn close_menu(&mut self) {
        self.mobile_menu = false;
    }

    pub fn menu_open(&self) -> bool {
        self.mobile_menu
    }

    /// The mobile cart button closes the menu and opens the cart.
    pub fn open_cart_from_menu(&mut self) {
        self.close_menu();
        self.open_cart();
    }

    /// Following a navigation link (`#section`).
    pub fn navigate(&mut self, target: &str) {
        self.close_menu();
        self.set_active_section(target);
    }

    /// Scroll spy: the section now in view.
    pub fn set_active_section(&mut self, target: &str) {
        let section = target.trim_start_matches('#');
        self.active_section = Some(section.to_string());
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Escape closes every modal and the menu.
    pub fn escape(&mut self) {
        self.product_modal = None;
        self.cart_modal = false;
        self.mobile_menu = false;
    }

    /// Growing past the mobile breakpoint closes the menu.
    pub fn resize(&mut self, width: u32, mobile_breakpoint: u32) {
        if width > mobile_breakpoint {
            self.close_menu();
        }
    }

    /// Body scrolling is locked while any overlay is open.
    pub fn scroll_locked(&self) -> bool {
        self.product_modal.is_some() || self.cart_modal || self.mobile_menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> ProductDetail {
        ProductDetail {
            product_id: "mug".to_string(),
            name: "Mug".to_string(),
            price: "8.00 \u{20ac}".to_string(),
            image: "img2".to_string(),
            category: "kitchen".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_scroll_lock_follows_overlays() {
        let mut layout = Layout::new();
        assert!(!layout.scroll_locked());

        layout.open_product(detail());
        layout.open_cart();
        assert!(layout.scroll_locked());

        layout.close_product();
        assert!(layout.scroll_locked());
        layout.close_cart();
        assert!(!layout.scroll_locked());
    }

    #[test]
    fn test_escape_closes_everything() {
        let mut layout = Layout::new();
        layout.open_product(detail());
        layout.open_cart();
        layout.toggle_menu();

        layout.escape();
        assert!(layout.product().is_none());
        assert!(!layout.cart_open());
        assert!(!layout.menu_open());
    }

    #[test]
    fn test_resize_closes_menu_on_desktop_only() {
        let mut layout = Layout::new();
        layout.toggle_menu();
        layout.resize(768, 768);
        assert!(layout.menu_open());
        layout.resize(1024, 768);
        assert!(!layout.menu_open());
    }

    #[test]
    fn test_navigate_sets_section_and_closes_menu() {
        let mut layout = Layout::new();
        layout.toggle_menu();
        layout.navigate("#products");
        assert_eq!(layout.active_section(), Some("products"));
        assert!(!layout.menu_open());
    }

    #[test]
    fn test_cart_from_menu() {
        let mut layout = Layout::new();
        layout.toggle_menu();
        layout.open_cart_from_menu();
        assert!(!layout.menu_open());
        assert!(layout.cart_open());
    }
}
