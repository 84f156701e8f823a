//! Storefront session flows against a real file slot.

use std::cell::RefCell;
use std::rc::Rc;

use cart_store::catalog::{Category, Product, ProductFilter};
use cart_store::view::{notification, CartView};
use cart_store::{open_file_store, CartConfig, CartEvent, HydrateOutcome, LineItemId};

fn config_in(dir: &tempfile::TempDir) -> CartConfig {
    CartConfig {
        storage_dir: dir.path().to_path_buf(),
        ..CartConfig::default()
    }
}

#[test]
fn cart_survives_page_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(&dir);

    let (mut store, outcome) = open_file_store(&config);
    assert_eq!(outcome, HydrateOutcome::Fresh);
    store.add("Whey Protein", 1999, "img/whey.jpg");
    store.add("Whey Protein", 1999, "img/whey.jpg");
    store.add("Creatine", 899, "img/creatine.jpg");
    drop(store);

    let (reloaded, outcome) = open_file_store(&config);

    assert_eq!(outcome, HydrateOutcome::Restored { line_items: 2 });
    assert_eq!(reloaded.item_count(), 3);
    assert_eq!(reloaded.total(), 1999 * 2 + 899);
    assert_eq!(reloaded.items()[0].name, "Whey Protein");
    assert_eq!(reloaded.items()[0].quantity, 2);
}

#[test]
fn legacy_storefront_blob_is_hydrated() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("cart.json"),
        r#"[{"id":1717171717171,"name":"BCAA","price":1299,"image":"img/bcaa.jpg","quantity":3}]"#,
    )
    .expect("seed slot");

    let (mut store, outcome) = open_file_store(&config_in(&dir));
    assert_eq!(outcome, HydrateOutcome::Restored { line_items: 1 });

    store.update_quantity(&LineItemId::new("1717171717171"), -1);

    assert_eq!(store.item_count(), 2);
    assert_eq!(store.total(), 2598);
}

#[test]
fn corrupt_slot_starts_empty_and_is_overwritten_on_next_add() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cart.json");
    std::fs::write(&path, "[{\"id\":").expect("seed slot");

    let (mut store, outcome) = open_file_store(&config_in(&dir));
    assert_eq!(outcome, HydrateOutcome::Discarded);
    assert!(store.items().is_empty());

    store.add("Creatine", 899, "img/creatine.jpg");

    let (reloaded, outcome) = open_file_store(&config_in(&dir));
    assert_eq!(outcome, HydrateOutcome::Restored { line_items: 1 });
    assert_eq!(reloaded.total(), 899);
}

#[test]
fn browse_add_and_checkout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(&dir);
    let catalogue = vec![
        Product {
            name: "Whey Protein".to_string(),
            description: "Isolate".to_string(),
            unit_price: 1999,
            image_ref: "img/whey.jpg".to_string(),
        },
        Product {
            name: "Creatine".to_string(),
            description: "Monohydrate".to_string(),
            unit_price: 899,
            image_ref: "img/creatine.jpg".to_string(),
        },
    ];

    let (mut store, _) = open_file_store(&config);
    let toasts = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&toasts);
    let symbol = config.currency_symbol.clone();
    store.subscribe(move |event: &CartEvent| {
        if let Some(text) = notification(event, &symbol) {
            sink.borrow_mut().push(text);
        }
    });

    let hits = ProductFilter::new("whey", Category::Protein).apply(&catalogue);
    assert_eq!(hits.len(), 1);
    store.add_product(hits[0].to_product_ref());
    store.add_product(catalogue[1].to_product_ref());

    let view = CartView::from_cart(store.cart(), &config.currency_symbol);
    assert_eq!(view.total_label, "₹2898");

    let receipt = store.checkout().expect("cart has items");
    assert_eq!(receipt.total, 2898);
    assert!(store.checkout().is_none());

    let toasts = toasts.borrow();
    assert_eq!(
        toasts.as_slice(),
        &[
            "Whey Protein added to cart!".to_string(),
            "Creatine added to cart!".to_string(),
            "Proceeding to checkout...".to_string(),
            "Thank you for your order!\nTotal Items: 2\nTotal Amount: ₹2898".to_string(),
            "Your cart is empty!".to_string(),
        ]
    );

    let (reloaded, _) = open_file_store(&config);
    assert!(reloaded.items().is_empty());
}
