//! Cart store behavior against a file-backed slot, as across page reloads.

use greenlink_cache::{Cache, FileBackend, KvBackend};
use greenlink_commerce::prelude::*;

fn eur(cents: i64) -> Money {
    Money::new(cents, Currency::EUR)
}

fn open(dir: &std::path::Path) -> CartStore<FileBackend> {
    let backend = FileBackend::open(dir).unwrap();
    CartStore::load(Cache::new(backend), DEFAULT_CART_SLOT, Currency::EUR)
}

#[test]
fn distinct_adds_count_and_sum() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(dir.path());
    let prices = [1250, 800, 499, 1];
    for (i, cents) in prices.iter().enumerate() {
        store.add(format!("item-{i}"), eur(*cents), "").unwrap();
    }

    assert_eq!(store.item_count(), prices.len() as u64);
    assert_eq!(store.total(), eur(prices.iter().sum()));
}

#[test]
fn cart_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = open(dir.path());
        store.add("Tote Bag", eur(1250), "img1").unwrap();
        store.add("Tote Bag", eur(1250), "img1").unwrap();
        store.add("Mug", eur(800), "img2").unwrap();
        store.update_quantity(&LineKey::name("Mug"), 1).unwrap();
    }

    let store = open(dir.path());
    let lines: Vec<(&str, u32)> = store
        .items()
        .iter()
        .map(|l| (l.name.as_str(), l.quantity))
        .collect();
    assert_eq!(lines, vec![("Tote Bag", 2), ("Mug", 2)]);
    assert_eq!(store.total(), eur(4100));
}

#[test]
fn corrupted_slot_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = open(dir.path());
        store.add("Mug", eur(800), "img2").unwrap();
    }
    FileBackend::open(dir.path())
        .unwrap()
        .set(DEFAULT_CART_SLOT, b"{\"cart\": \"garbage\"")
        .unwrap();

    let mut store = open(dir.path());
    assert!(store.is_empty());
    assert_eq!(store.total(), eur(0));

    // The next mutation overwrites the corrupt snapshot.
    store.add("Mug", eur(800), "img2").unwrap();
    let reloaded = open(dir.path());
    assert_eq!(reloaded.item_count(), 1);
}

#[test]
fn clear_always_zeroes_queries() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(dir.path());
    store.clear().unwrap();
    assert_eq!((store.item_count(), store.total()), (0, eur(0)));

    store.add("Mug", eur(800), "img2").unwrap();
    store.update_quantity(&LineKey::name("Mug"), 41).unwrap();
    store.clear().unwrap();
    assert_eq!((store.item_count(), store.total()), (0, eur(0)));
}

#[test]
fn checkout_then_reload_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(dir.path());
    store.add("Tote Bag", eur(1250), "img1").unwrap();

    let receipt = store.checkout().unwrap();
    assert_eq!(receipt.total, eur(1250));
    assert!(open(dir.path()).is_empty());

    assert!(matches!(store.checkout(), Err(CommerceError::EmptyCart)));
}

#[test]
fn clear_rewrites_a_discarded_slot() {
    let dir = tempfile::tempdir().unwrap();
    FileBackend::open(dir.path())
        .unwrap()
        .set(DEFAULT_CART_SLOT, b"not json")
        .unwrap();

    let mut store = open(dir.path());
    assert!(store.is_empty());
    store.clear().unwrap();

    let raw = Cache::new(FileBackend::open(dir.path()).unwrap())
        .get_raw(DEFAULT_CART_SLOT)
        .unwrap();
    assert_eq!(raw.as_deref(), Some("[]"));
}
