//! Page-level flows through the storefront binding.

use std::sync::Arc;
use std::time::{Duration, Instant};

use greenlink_cache::{Cache, KvBackend, MemoryBackend};
use greenlink_commerce::prelude::*;
use greenlink_view::{Storefront, Submission, ViewConfig};

const CATALOG: &str = r#"[
    {"id":"tote","name":"Tote Bag","price":12.5,"image":"img1","category":"accessories","description":"Organic cotton tote"},
    {"id":"mug","name":"Mug","price":8,"image":"img2","category":"kitchen","description":"Stoneware"},
    {"id":"brush","name":"Bamboo Brush","price":3.5,"image":"img3","category":"bathroom","description":""}
]"#;

fn storefront_on(backend: Arc<MemoryBackend>) -> Storefront<Arc<MemoryBackend>> {
    let store = CartStore::load(Cache::new(backend), DEFAULT_CART_SLOT, Currency::EUR);
    let catalog = Catalog::from_json(CATALOG, Currency::EUR).unwrap();
    Storefront::new(store, catalog, ViewConfig::default())
}

fn storefront() -> Storefront<Arc<MemoryBackend>> {
    storefront_on(Arc::new(MemoryBackend::new()))
}

#[test]
fn adding_updates_badge_toast_and_pulse() {
    let now = Instant::now();
    let mut page = storefront();

    page.add_to_cart("tote", now).unwrap();
    page.add_to_cart("tote", now).unwrap();
    page.add_to_cart("mug", now).unwrap();

    assert_eq!(page.panel().badge, 3);
    assert_eq!(page.panel().total.as_deref(), Some("33.00 \u{20ac}"));
    assert_eq!(
        page.toast(now).unwrap().notice,
        Notice::success("Mug added to cart")
    );
    assert!(page.pulse_active(now + Duration::from_millis(500)));
    assert!(!page.pulse_active(now + Duration::from_millis(600)));

    page.tick(now + Duration::from_secs(4));
    assert!(page.toast(now + Duration::from_secs(4)).is_none());
}

#[test]
fn product_modal_adds_and_closes() {
    let now = Instant::now();
    let mut page = storefront();

    let detail = page.open_product("brush").unwrap();
    assert_eq!(detail.price, "3.50 \u{20ac}");
    assert!(page.layout().scroll_locked());

    assert_eq!(page.add_from_modal(now).unwrap(), Some(1));
    assert!(page.layout().product().is_none());
    assert!(!page.layout().scroll_locked());
    assert_eq!(page.add_from_modal(now).unwrap(), None);
}

#[test]
fn quantity_buttons_and_removal() {
    let now = Instant::now();
    let mut page = storefront();
    page.add_to_cart("mug", now).unwrap();

    page.change_quantity(&LineKey::id("mug"), 1, now).unwrap();
    assert_eq!(page.panel().rows[0].quantity, 2);

    assert_eq!(
        page.change_quantity(&LineKey::id("mug"), -2, now).unwrap(),
        QuantityChange::Removed
    );
    assert!(page.panel().is_empty());
    assert_eq!(page.panel().total, None);
    assert_eq!(
        page.toast(now).unwrap().notice.message,
        "Item removed from cart"
    );
}

#[test]
fn checkout_flow() {
    let now = Instant::now();
    let mut page = storefront();

    page.open_cart();
    assert!(matches!(page.checkout(now), Err(CommerceError::EmptyCart)));
    assert!(page.layout().cart_open());
    assert_eq!(
        page.toast(now).unwrap().notice,
        Notice::error("Your cart is empty")
    );

    page.add_to_cart("tote", now).unwrap();
    let receipt = page.checkout(now).unwrap();
    assert_eq!(receipt.total.display(), "12.50 \u{20ac}");
    assert!(!page.layout().cart_open());
    assert_eq!(page.panel().badge, 0);
    // Clearing after the order replaces the confirmation toast, as on the page.
    assert_eq!(
        page.toast(now).unwrap().notice,
        Notice::success("Cart cleared")
    );
}

#[test]
fn catalog_add_continues_line_saved_by_name() {
    let now = Instant::now();
    let backend = Arc::new(MemoryBackend::new());
    backend
        .set(
            DEFAULT_CART_SLOT,
            br#"[{"name":"Mug","price":8,"image":"img2","quantity":1}]"#,
        )
        .unwrap();

    let mut page = storefront_on(backend);
    assert_eq!(page.panel().rows[0].key, LineKey::name("Mug"));

    assert_eq!(page.add_to_cart("mug", now).unwrap(), 2);
    assert_eq!(page.panel().rows.len(), 1);
    assert_eq!(page.panel().rows[0].key, LineKey::id("mug"));
    assert_eq!(page.panel().badge, 2);
}

#[test]
fn rendered_row_key_drives_its_buttons() {
    let now = Instant::now();
    let mut page = storefront();
    page.add_to_cart("tote", now).unwrap();

    let rendered = page.panel().rows[0].key.to_string();
    assert_eq!(rendered, "id:tote");
    let key: LineKey = rendered.parse().unwrap();
    assert!(page.remove(&key, now).unwrap());
    assert!(page.panel().is_empty());
}

#[test]
fn unknown_product_is_toasted() {
    let now = Instant::now();
    let mut page = storefront();
    assert!(page.add_to_cart("lamp", now).is_err());

    let toast = page.toast(now).unwrap();
    assert_eq!(toast.notice.severity, Severity::Error);
    assert_eq!(page.panel().badge, 0);
}

#[test]
fn cart_panel_restored_after_reload() {
    let now = Instant::now();
    let backend = Arc::new(MemoryBackend::new());
    {
        let mut page = storefront_on(Arc::clone(&backend));
        page.add_to_cart("tote", now).unwrap();
        page.add_to_cart("mug", now).unwrap();
    }

    let page = storefront_on(Arc::clone(&backend));
    assert_eq!(page.panel().badge, 2);

    backend.set(DEFAULT_CART_SLOT, b"corrupt").unwrap();
    let page = storefront_on(backend);
    assert_eq!(page.panel().badge, 0);
    assert!(page.toast(now).is_none());
}

#[test]
fn category_filter_and_contact_form() {
    let now = Instant::now();
    let mut page = storefront();

    let shown: Vec<&str> = page
        .select_category("kitchen".parse().unwrap())
        .iter()
        .filter(|v| v.shown)
        .map(|v| v.product.id.as_str())
        .collect();
    assert_eq!(shown, vec!["mug"]);

    assert!(matches!(page.submit_contact(now), Submission::Rejected(_)));
    page.contact_input("name", "Ada");
    page.contact_input("email", "ada@greenlink.eco");
    page.contact_input("message", "Hello");
    assert!(matches!(page.submit_contact(now), Submission::Sent(_)));
    assert_eq!(
        page.toast(now).unwrap().notice.message,
        "Message sent successfully!"
    );
}

#[test]
fn escape_and_resize() {
    let mut page = storefront();
    page.toggle_menu();
    page.resize(1200);
    assert!(!page.layout().menu_open());

    page.toggle_menu();
    page.add_to_cart("mug", Instant::now()).unwrap();
    page.open_cart_from_menu();
    assert!(page.layout().cart_open());
    assert!(!page.layout().menu_open());
    assert_eq!(page.panel().badge, 1);
    page.escape();
    assert!(!page.layout().scroll_locked());
}
