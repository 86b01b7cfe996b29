//! Cart aggregation against the shipped storefront fixture set.

use rusty_money::{Money, iso::USD};
use tempfile::TempDir;
use testresult::TestResult;

use storefront::{
    cli::{load_snapshot, save_snapshot},
    prelude::*,
};

#[test]
fn empty_cart_charges_shipping_only() {
    let summary = summarize(&[], USD);

    assert_eq!(summary.subtotal(), Money::from_minor(0, USD));
    assert_eq!(summary.tax(), Money::from_minor(0, USD));
    assert_eq!(summary.shipping(), Money::from_minor(SHIPPING_FEE, USD));
    assert_eq!(summary.total(), Money::from_minor(599, USD));
    assert_eq!(summary.item_count(), 0);
}

#[test]
fn two_twenty_dollar_items_total_forty_three_twenty() {
    let product = Product::new(100, "Scarf", "clothing", Money::from_minor(2_000, USD));
    let mut cart = Cart::new(USD);
    cart.add_item(&product, 2);

    let summary = cart.summary();

    assert_eq!(summary.subtotal(), Money::from_minor(4_000, USD));
    assert_eq!(summary.tax(), Money::from_minor(320, USD));
    assert!(summary.has_free_shipping());
    assert_eq!(summary.total(), Money::from_minor(4_320, USD));
    assert_eq!(summary.item_count(), 2);
}

#[test]
fn exactly_the_threshold_still_pays_shipping() {
    let product = Product::new(100, "Gift Card", "books", Money::from_minor(FREE_SHIPPING_THRESHOLD, USD));
    let mut cart = Cart::new(USD);
    cart.add_item(&product, 1);

    let summary = cart.summary();

    assert!(!summary.has_free_shipping());
    assert_eq!(summary.shipping(), Money::from_minor(599, USD));
    assert_eq!(summary.free_shipping_shortfall(), Some(Money::from_minor(0, USD)));
}

#[test]
fn adding_the_same_product_twice_merges_lines() -> TestResult {
    let catalog = Fixture::from_set("storefront")?.catalog()?;
    let tee = catalog.product(ProductId(3)).ok_or("missing t-shirt")?;
    let mut cart = Cart::for_catalog(&catalog);

    cart.add_item(tee, 1);
    cart.add_item(tee, 2);

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.item_count(), 3);

    let summary = cart.summary();
    assert_eq!(summary.subtotal(), Money::from_minor(8_997, USD));
    assert_eq!(summary.tax(), Money::from_minor(720, USD));
    assert_eq!(summary.total(), Money::from_minor(9_717, USD));

    Ok(())
}

#[test]
fn quantities_never_drop_below_one() -> TestResult {
    let catalog = Fixture::from_set("storefront")?.catalog()?;
    let jeans = catalog.product(ProductId(2)).ok_or("missing jeans")?;
    let mut cart = Cart::for_catalog(&catalog);
    cart.add_item(jeans, 2);

    cart.set_quantity(ProductId(2), 0);
    assert_eq!(cart.line(ProductId(2)).map(CartLineItem::quantity), Some(1));

    cart.set_quantity(ProductId(2), -5);
    cart.decrement(ProductId(2));
    assert_eq!(cart.line(ProductId(2)).map(CartLineItem::quantity), Some(1));

    Ok(())
}

#[test]
fn unknown_ids_leave_the_cart_untouched() -> TestResult {
    let catalog = Fixture::from_set("storefront")?.catalog()?;
    let pot = catalog.product(ProductId(4)).ok_or("missing instant pot")?;
    let mut cart = Cart::for_catalog(&catalog);
    cart.add_item(pot, 1);
    let before = cart.snapshot();

    cart.remove_item(ProductId(999));
    cart.set_quantity(ProductId(999), 4);
    cart.increment(ProductId(999));

    assert_eq!(cart.snapshot(), before);

    Ok(())
}

#[test]
fn saved_carts_restore_against_the_catalog() -> TestResult {
    let catalog = Fixture::from_set("storefront")?.catalog()?;
    let dir = TempDir::new()?;
    let path = dir.path().join("cart.yml");

    let mut cart = Cart::for_catalog(&catalog);
    for id in [1, 5] {
        let product = catalog.product(ProductId(id)).ok_or("missing product")?;
        cart.add_item(product, 2);
    }
    save_snapshot(&path, &cart.snapshot())?;

    let restored = Cart::restore(&load_snapshot(&path)?, &catalog);

    assert_eq!(restored.snapshot(), cart.snapshot());
    assert_eq!(restored.summary(), cart.summary());

    Ok(())
}

#[test]
fn restore_skips_products_missing_from_the_catalog() -> TestResult {
    let catalog = Fixture::from_set("storefront")?.catalog()?;
    let snapshot = CartSnapshot::from_yaml("1: 1\n999: 3\n")?;

    let cart = Cart::restore(&snapshot, &catalog);

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.item_count(), 1);

    Ok(())
}

#[test]
fn order_history_loads_with_the_catalog() -> TestResult {
    let orders = Fixture::from_set("storefront")?.orders();

    assert_eq!(orders.len(), 2);

    let delivered = orders.order("ORD-12345678").ok_or("missing order")?;
    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert!(delivered.can_review());

    let in_transit = orders.order("ORD-87654321").ok_or("missing order")?;
    assert_eq!(in_transit.status, OrderStatus::InTransit);
    assert!(!in_transit.can_return());
    assert_eq!(in_transit.item_count(), 2);

    Ok(())
}
