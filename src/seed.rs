//! Seed Data
//!
//! The catalog and promotion configuration a storefront is initialised from.
//!
//! Seeds are read from YAML:
//!
//! ```yaml
//! products:
//!   - sku: A0001
//!     name: Artikel A0001
//!     price: 12.99 EUR
//! promotions:
//!   - sku: A0001
//!     type: tenPercentOff
//! ```

use std::{fs, path::Path};

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::catalog::{CatalogItem, Sku};

/// Seed Parsing Errors
#[derive(Debug, Error)]
pub enum SeedError {
    /// IO error reading the seed file
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Two products share a SKU
    #[error("Duplicate product SKU: {0}")]
    DuplicateSku(Sku),

    /// Two promotions target the same SKU
    #[error("Duplicate promotion for SKU: {0}")]
    DuplicatePromotion(Sku),

    /// The seed contains no products
    #[error("Seed contains no products")]
    NoProducts,
}

/// Product entry as written in the seed.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    /// Product SKU
    pub sku: Sku,

    /// Display name
    pub name: String,

    /// Unit price (e.g., "12.99 EUR")
    pub price: String,
}

/// Promotion entry as written in the seed.
///
/// The type is kept as written; it is only interpreted when promotions are loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PromotionRecord {
    /// SKU the promotion discounts
    pub sku: Sku,

    /// Promotion type name (e.g., `buyOneGetOneFree`)
    #[serde(rename = "type")]
    pub kind: String,
}

impl PromotionRecord {
    /// Create a new promotion record.
    pub fn new(sku: impl Into<Sku>, kind: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            kind: kind.into(),
        }
    }
}

/// Wrapper for the seed document in YAML
#[derive(Debug, Deserialize)]
struct SeedFixture {
    products: Vec<ProductRecord>,

    #[serde(default)]
    promotions: Vec<PromotionRecord>,
}

/// Validated seed data.
#[derive(Debug, Clone)]
pub struct Seed {
    currency: &'static Currency,
    catalog: Vec<CatalogItem>,
    promotions: Vec<PromotionRecord>,
}

impl Seed {
    /// Create a seed from already built parts.
    pub fn new(
        currency: &'static Currency,
        catalog: Vec<CatalogItem>,
        promotions: Vec<PromotionRecord>,
    ) -> Self {
        Self {
            currency,
            catalog,
            promotions,
        }
    }

    /// The built-in demo data set.
    pub fn demo() -> Self {
        Self::new(
            EUR,
            vec![
                CatalogItem::new("A0001", "Artikel A0001", Money::from_minor(1299, EUR)),
                CatalogItem::new("A0002", "Artikel A0002", Money::from_minor(399, EUR)),
                CatalogItem::new("A0003", "Artikel A0003", Money::from_minor(1000, EUR)),
            ],
            vec![
                PromotionRecord::new("A0002", "buyOneGetOneFree"),
                PromotionRecord::new("A0001", "tenPercentOff"),
            ],
        )
    }

    /// Parse a seed from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a price cannot be parsed, products use
    /// more than one currency, a SKU is repeated, or there are no products at all.
    pub fn from_yaml(yaml: &str) -> Result<Self, SeedError> {
        let fixture: SeedFixture = serde_norway::from_str(yaml)?;

        let mut currency: Option<&'static Currency> = None;
        let mut skus = FxHashSet::default();
        let mut catalog = Vec::with_capacity(fixture.products.len());

        for record in fixture.products {
            let price = parse_price(&record.price)?;

            match currency {
                Some(existing) if existing != price.currency() => {
                    return Err(SeedError::CurrencyMismatch(
                        existing.iso_alpha_code.to_string(),
                        price.currency().iso_alpha_code.to_string(),
                    ));
                }
                Some(_) => {}
                None => currency = Some(price.currency()),
            }

            if !skus.insert(record.sku.clone()) {
                return Err(SeedError::DuplicateSku(record.sku));
            }

            catalog.push(CatalogItem::new(record.sku, record.name, price));
        }

        let currency = currency.ok_or(SeedError::NoProducts)?;

        let mut promoted = FxHashSet::default();

        for record in &fixture.promotions {
            if !promoted.insert(&record.sku) {
                return Err(SeedError::DuplicatePromotion(record.sku.clone()));
            }
        }

        debug!(
            products = catalog.len(),
            promotions = fixture.promotions.len(),
            currency = currency.iso_alpha_code,
            "parsed seed"
        );

        Ok(Self::new(currency, catalog, fixture.promotions))
    }

    /// Read and parse a YAML seed file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Io`] if the file cannot be read, otherwise the errors of
    /// [`Seed::from_yaml`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Currency every catalog price is given in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Catalog items, in seed order.
    pub fn catalog(&self) -> &[CatalogItem] {
        &self.catalog
    }

    /// Promotion entries, in seed order.
    pub fn promotions(&self) -> &[PromotionRecord] {
        &self.promotions
    }

    /// Split the seed into its currency, catalog, and promotion entries.
    pub fn into_parts(self) -> (&'static Currency, Vec<CatalogItem>, Vec<PromotionRecord>) {
        (self.currency, self.catalog, self.promotions)
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::demo()
    }
}

/// Parse a price string (e.g., "12.99 EUR") into money.
///
/// The amount keeps every decimal place it was written with.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY", if the
/// amount is not a non-negative decimal, or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<Money<'static, Currency>, SeedError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(SeedError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| SeedError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(SeedError::InvalidPrice(s.to_string()));
    }

    let currency = match *currency_code {
        "EUR" => EUR,
        "GBP" => GBP,
        "USD" => USD,
        other => return Err(SeedError::UnknownCurrency(other.to_string())),
    };

    Ok(Money::from_decimal(amount, currency))
}
