//! Integration tests for reading seed files from disk.

use std::{fs, path::Path};

use tempfile::tempdir;
use testresult::TestResult;

use shopfront::prelude::*;

#[test]
fn demo_fixture_matches_built_in_seed() -> TestResult {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/demo.yml");

    let from_file = Seed::from_path(path)?;
    let built_in = Seed::demo();

    assert_eq!(from_file.currency(), built_in.currency());
    assert_eq!(from_file.catalog(), built_in.catalog());
    assert_eq!(from_file.promotions(), built_in.promotions());

    Ok(())
}

#[test]
fn storefront_opens_from_seed_file() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("seed.yml");

    fs::write(
        &path,
        r"
products:
  - sku: B0001
    name: Widget
    price: 2.50 GBP
promotions:
  - sku: B0001
    type: buyOneGetOneFree
",
    )?;

    let mut storefront = Storefront::from_path(&path)?;

    storefront.add_item("B0001");
    storefront.add_item("B0001");

    assert_eq!(format_money(&storefront.total()?), "2.50 GBP");

    Ok(())
}

#[test]
fn unknown_promotion_type_in_file_fails_to_open() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("seed.yml");

    fs::write(
        &path,
        r"
products:
  - sku: B0001
    name: Widget
    price: 2.50 GBP
promotions:
  - sku: B0001
    type: threeForTwo
",
    )?;

    let result = Storefront::from_path(&path);

    assert!(matches!(
        result,
        Err(StorefrontError::Promotion(PromotionError::UnknownPromotionType(_)))
    ));

    Ok(())
}

#[test]
fn missing_seed_file_is_an_io_error() -> TestResult {
    let dir = tempdir()?;

    let result = Storefront::from_path(dir.path().join("missing.yml"));

    assert!(matches!(result, Err(StorefrontError::Seed(SeedError::Io(_)))));

    Ok(())
}
