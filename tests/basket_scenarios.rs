//! Integration tests for basket totals against the demo storefront.
//!
//! Demo catalog (EUR):
//!
//! - A0001: 12.99, ten percent off
//! - A0002: 3.99, buy one get one free
//! - A0003: 10.00, no promotion

use rust_decimal::Decimal;
use rusty_money::{Money, iso::EUR};
use testresult::TestResult;

use shopfront::prelude::*;

fn single_item_storefront(
    sku: &str,
    minor: i64,
    promotions: Vec<PromotionRecord>,
) -> TestResult<Storefront> {
    let seed = Seed::new(
        EUR,
        vec![CatalogItem::new(
            sku,
            format!("Artikel {sku}"),
            Money::from_minor(minor, EUR),
        )],
        promotions,
    );

    Ok(Storefront::open(seed)?)
}

#[test]
fn empty_basket_totals_zero() -> TestResult {
    let storefront = single_item_storefront("A0001", 1299, Vec::new())?;

    assert_eq!(storefront.total()?, Money::from_minor(0, EUR));
    assert!(storefront.basket_items().is_empty());

    Ok(())
}

#[test]
fn two_units_without_promotion() -> TestResult {
    let mut storefront = single_item_storefront("A0001", 1299, Vec::new())?;

    storefront.add_item("A0001");
    storefront.add_item("A0001");

    assert_eq!(*storefront.total()?.amount(), Decimal::new(2598, 2));

    Ok(())
}

#[test]
fn buy_one_get_one_free_on_three_units() -> TestResult {
    let mut storefront = single_item_storefront(
        "A0002",
        399,
        vec![PromotionRecord::new("A0002", "buyOneGetOneFree")],
    )?;

    for _ in 0..3 {
        storefront.add_item("A0002");
    }

    assert_eq!(*storefront.total()?.amount(), Decimal::new(798, 2));

    Ok(())
}

#[test]
fn ten_percent_off_single_unit() -> TestResult {
    let mut storefront = single_item_storefront(
        "A0001",
        1299,
        vec![PromotionRecord::new("A0001", "tenPercentOff")],
    )?;

    storefront.add_item("A0001");

    assert_eq!(*storefront.total()?.amount(), Decimal::new(11_691, 3));

    Ok(())
}

#[test]
fn deactivating_promotions_restores_full_price() -> TestResult {
    let mut storefront = Storefront::open(Seed::demo())?;

    storefront.add_item("A0001");
    storefront.add_item("A0002");
    storefront.add_item("A0002");
    storefront.add_item("A0003");

    // 11.691 + 3.99 + 10.00
    assert_eq!(*storefront.total()?.amount(), Decimal::new(25_681, 3));

    assert!(storefront.set_promotion_active("A0001", false));
    assert_eq!(storefront.toggle_promotion("A0002"), Some(false));

    // 12.99 + 7.98 + 10.00
    assert_eq!(storefront.total()?, Money::from_minor(3097, EUR));
    assert_eq!(storefront.item_count("A0002"), 2);

    Ok(())
}

#[test]
fn unknown_promotion_type_halts_initialisation() {
    let seed = Seed::new(
        EUR,
        vec![CatalogItem::new("A0001", "Artikel A0001", Money::from_minor(1299, EUR))],
        vec![
            PromotionRecord::new("A0001", "tenPercentOff"),
            PromotionRecord::new("A0001", "buyTwoGetThreeFree"),
        ],
    );

    let mut storefront = Storefront::new(seed);
    let result = storefront.init();

    assert!(matches!(
        result,
        Err(StorefrontError::Promotion(PromotionError::UnknownPromotionType(kind)))
            if kind == "buyTwoGetThreeFree"
    ));
    assert!(storefront.promotions().is_empty());
}

#[test]
fn quantities_never_drop_below_one() -> TestResult {
    let mut storefront = Storefront::open(Seed::demo())?;

    let actions = [
        ("A0001", true),
        ("A0002", false),
        ("A0001", false),
        ("A0001", false),
        ("A0003", true),
        ("A0003", true),
        ("A0003", false),
        ("A0002", true),
    ];

    for (sku, add) in actions {
        if add {
            storefront.add_item(sku);
        } else {
            storefront.remove_item(sku);
        }

        assert!(
            storefront.basket_items().iter().all(|entry| entry.quantity >= 1),
            "basket stored a zero quantity after {sku}"
        );
    }

    assert_eq!(storefront.item_count("A0001"), 0);
    assert_eq!(storefront.item_count("A0002"), 1);
    assert_eq!(storefront.item_count("A0003"), 1);

    Ok(())
}

#[test]
fn removing_an_absent_sku_changes_nothing() -> TestResult {
    let mut storefront = Storefront::open(Seed::demo())?;
    storefront.add_item("A0003");

    let before = storefront.basket_items();
    let total_before = storefront.total()?;

    storefront.remove_item("A0001");
    storefront.remove_item("nope");

    assert_eq!(storefront.basket_items(), before);
    assert_eq!(storefront.total()?, total_before);

    Ok(())
}

#[test]
fn add_then_remove_round_trips() -> TestResult {
    let mut storefront = Storefront::open(Seed::demo())?;

    storefront.add_item("A0002");
    let before = storefront.basket_items();

    storefront.add_item("A0001");
    storefront.remove_item("A0001");

    assert_eq!(storefront.basket_items(), before);

    Ok(())
}

#[test]
fn skus_missing_from_catalog_are_not_priced() -> TestResult {
    let mut storefront = Storefront::open(Seed::demo())?;

    storefront.add_item("Z0000");
    storefront.add_item("A0003");

    assert_eq!(storefront.item_count("Z0000"), 1);
    assert_eq!(storefront.total()?, Money::from_minor(1000, EUR));
    assert_eq!(storefront.receipt()?.lines().len(), 1);

    Ok(())
}

#[test]
fn out_of_range_line_price_is_an_error() -> TestResult {
    let seed = Seed::from_yaml(
        r"
products:
  - sku: A0001
    name: Artikel A0001
    price: 79228162514264337593543950335 EUR
",
    )?;

    let mut storefront = Storefront::open(seed)?;

    storefront.add_item("A0001");
    assert_eq!(
        Some(storefront.total()?),
        storefront.item("A0001").map(|item| *item.price())
    );

    storefront.add_item("A0001");
    assert_eq!(
        storefront.total(),
        Err(BasketError::Overflow(Sku::from("A0001")))
    );
    assert!(storefront.receipt().is_err());

    Ok(())
}
