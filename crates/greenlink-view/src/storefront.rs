//! Binds the cart store and the view state to page events.

use std::time::Instant;

use greenlink_cache::KvBackend;
use greenlink_commerce::cart::{
    CartEvent, CartStore, LineKey, Notice, QuantityChange, Receipt, Severity,
};
use greenlink_commerce::catalog::{Catalog, CategoryFilter, Visibility};
use greenlink_commerce::CommerceError;

use crate::cart_panel::CartPanel;
use crate::config::ViewConfig;
use crate::contact::{self, ContactForm, Submission};
use crate::layout::{Layout, ProductDetail};
use crate::notify::{Pulse, Toast, ToastQueue};
use crate::scroll::{ScrollEffects, ScrollFrame};

/// The page's state, owned in one place.
///
/// Each handler runs one user action to completion, then folds the cart
/// store's events into the view: `Changed` re-renders the cart panel,
/// notices become toasts and added items start the button pulse. Errors
/// that did not already produce a notice are toasted as well, so every
/// failure ends in a visible, recoverable state.
#[derive(Debug)]
pub struct Storefront<B> {
    store: CartStore<B>,
    catalog: Catalog,
    config: ViewConfig,
    layout: Layout,
    toasts: ToastQueue,
    pulse: Pulse,
    scroll: ScrollEffects,
    contact: ContactForm,
    filter: CategoryFilter,
    panel: CartPanel,
}

impl<B: KvBackend> Storefront<B> {
    pub fn new(mut store: CartStore<B>, catalog: Catalog, config: ViewConfig) -> Self {
        // Load-time problems were logged by the store and stay off screen.
        store.take_events();
        let panel = CartPanel::from_cart(store.cart());
        Self {
            toasts: ToastQueue::new(config.toast_ttl()),
            pulse: Pulse::new(config.pulse()),
            scroll: ScrollEffects::new(&config),
            store,
            catalog,
            config,
            layout: Layout::new(),
            contact: ContactForm::default(),
            filter: CategoryFilter::All,
            panel,
        }
    }

    /// An "add to cart" button on a product card.
    pub fn add_to_cart(&mut self, product_id: &str, now: Instant) -> Result<u32, CommerceError> {
        let result = match self.catalog.get(product_id) {
            Ok(product) => {
                let item = product.to_line_item();
                self.store.add_item(item)
            }
            Err(err) => Err(err),
        };
        self.settle(result, now)
    }

    /// A "details" button: fill and open the product modal.
    pub fn open_product(&mut self, product_id: &str) -> Result<&ProductDetail, CommerceError> {
        let detail = ProductDetail::from(self.catalog.get(product_id)?);
        self.layout.open_product(detail);
        self.layout
            .product()
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))
    }

    /// The modal's add button: add the shown product and close the modal.
    ///
    /// Returns `Ok(None)` when no product modal is open.
    pub fn add_from_modal(&mut self, now: Instant) -> Result<Option<u32>, CommerceError> {
        let Some(detail) = self.layout.close_product() else {
            return Ok(None);
        };
        self.add_to_cart(&detail.product_id, now).map(Some)
    }

    /// The plus and minus buttons on a cart row.
    pub fn change_quantity(
        &mut self,
        key: &LineKey,
        delta: i64,
        now: Instant,
    ) -> Result<QuantityChange, CommerceError> {
        let result = self.store.update_quantity(key, delta);
        self.settle(result, now)
    }

    /// The trash button on a cart row.
    pub fn remove(&mut self, key: &LineKey, now: Instant) -> Result<bool, CommerceError> {
        let result = self.store.remove_item(key);
        self.settle(result, now)
    }

    pub fn clear_cart(&mut self, now: Instant) -> Result<(), CommerceError> {
        let result = self.store.clear();
        self.settle(result, now)
    }

    /// Place the simulated order. A successful checkout closes the cart.
    pub fn checkout(&mut self, now: Instant) -> Result<Receipt, CommerceError> {
        let result = self.store.checkout();
        if result.is_ok() {
            self.layout.close_cart();
        }
        self.settle(result, now)
    }

    pub fn open_cart(&mut self) {
        self.panel = CartPanel::from_cart(self.store.cart());
        self.layout.open_cart();
    }

    pub fn close_cart(&mut self) {
        self.layout.close_cart();
    }

    pub fn toggle_menu(&mut self) {
        self.layout.toggle_menu();
    }

    /// The mobile menu's cart button.
    pub fn open_cart_from_menu(&mut self) {
        self.panel = CartPanel::from_cart(self.store.cart());
        self.layout.open_cart_from_menu();
    }

    pub fn navigate(&mut self, target: &str) {
        self.layout.navigate(target);
    }

    pub fn escape(&mut self) {
        self.layout.escape();
    }

    pub fn resize(&mut self, width: u32) {
        self.layout.resize(width, self.config.mobile_breakpoint_px);
    }

    pub fn scroll(&mut self, y: f64, width: u32) -> ScrollFrame {
        self.scroll.on_scroll(y, width)
    }

    /// A category card: filter the product grid.
    pub fn select_category(&mut self, filter: CategoryFilter) -> Vec<Visibility<'_>> {
        self.filter = filter;
        self.catalog.filter(&self.filter, self.config.reveal_stagger())
    }

    pub fn contact_input(&mut self, field: &str, value: impl Into<String>) {
        self.contact.input(field, value);
    }

    pub fn contact_blur(&mut self, field: &str) -> Option<bool> {
        self.contact.blur(field)
    }

    pub fn submit_contact(&mut self, now: Instant) -> Submission {
        let outcome = self.contact.submit();
        self.toasts.show(outcome.notice(), now);
        outcome
    }

    pub fn subscribe_newsletter(&mut self, email: &str, now: Instant) -> Notice {
        let notice = contact::subscribe_newsletter(email);
        self.toasts.show(notice.clone(), now);
        notice
    }

    /// Expire timed effects.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.tick(now);
    }

    pub fn panel(&self) -> &CartPanel {
        &self.panel
    }

    pub fn toast(&self, now: Instant) -> Option<&Toast> {
        self.toasts.visible(now)
    }

    pub fn pulse_active(&self, now: Instant) -> bool {
        self.pulse.is_active(now)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &CartStore<B> {
        &self.store
    }

    fn settle<T>(&mut self, result: Result<T, CommerceError>, now: Instant) -> Result<T, CommerceError> {
        let mut error_shown = false;
        for event in self.store.take_events() {
            match event {
                CartEvent::Changed => self.panel = CartPanel::from_cart(self.store.cart()),
                CartEvent::ItemAdded { .. } => self.pulse.trigger(now),
                CartEvent::Notice(notice) => {
                    error_shown |= notice.severity == Severity::Error;
                    self.toasts.show(notice, now);
                }
                CartEvent::SnapshotDiscarded { .. } | CartEvent::PersistFailed { .. } => {}
            }
        }
        if let Err(err) = &result {
            if !error_shown {
                self.toasts.show(Notice::error(err.to_string()), now);
            }
        }
        result
    }
}
