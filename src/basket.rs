//! Basket

use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    catalog::{CatalogItem, Sku, find_item},
    pricing::line_price,
    promotions::{Promotion, find_promotion},
};

/// Errors related to basket totals.
#[derive(Debug, Error, PartialEq)]
pub enum BasketError {
    /// A catalog price uses a different currency than the basket.
    ///
    /// Holds the SKU, the item currency and the basket currency.
    #[error("Item {0} has currency {1}, but basket has currency {2}")]
    CurrencyMismatch(Sku, &'static str, &'static str),

    /// A line price does not fit in the decimal range.
    #[error("Price of item {0} overflows")]
    Overflow(Sku),

    /// Wrapped money arithmetic error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Quantity of a single SKU held in the basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketEntry {
    /// Item SKU
    pub sku: Sku,

    /// Number of units, always at least one
    pub quantity: u32,
}

/// Basket
///
/// Entries keep the order in which their SKU was first added. An entry is removed as soon
/// as its quantity drops to zero.
#[derive(Debug, Clone)]
pub struct Basket {
    entries: SmallVec<[BasketEntry; 8]>,
    currency: &'static Currency,
}

impl Basket {
    /// Create a new, empty basket totalling in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Basket {
            entries: SmallVec::new(),
            currency,
        }
    }

    /// Add one unit of `sku`.
    pub fn add_item(&mut self, sku: &str) {
        match self.entry_mut(sku) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
            None => self.entries.push(BasketEntry {
                sku: Sku::from(sku),
                quantity: 1,
            }),
        }

        debug!(%sku, quantity = self.item_count(sku), "added item to basket");
    }

    /// Remove one unit of `sku`, if any are held.
    pub fn remove_item(&mut self, sku: &str) {
        let Some(position) = self.entries.iter().position(|entry| entry.sku == *sku) else {
            return;
        };

        let remaining = self.entries.get_mut(position).map(|entry| {
            entry.quantity = entry.quantity.saturating_sub(1);
            entry.quantity
        });

        if remaining == Some(0) {
            self.entries.remove(position);
        }

        debug!(%sku, quantity = self.item_count(sku), "removed item from basket");
    }

    /// Number of units of `sku` held, zero if none.
    pub fn item_count(&self, sku: &str) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.sku == *sku)
            .map_or(0, |entry| entry.quantity)
    }

    /// Copy of every entry, in insertion order.
    pub fn all_items(&self) -> Vec<BasketEntry> {
        self.entries.to_vec()
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BasketEntry> {
        self.entries.iter()
    }

    /// Calculate the basket total against a catalog and a set of promotions.
    ///
    /// Entries whose SKU is not in `items` are skipped. Entries with a promotion are
    /// priced by it, which charges full price while the promotion is inactive.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::CurrencyMismatch`] if a catalog price is not in the basket
    /// currency, or [`BasketError::Overflow`] if a line price is out of range.
    pub fn calculate_total(
        &self,
        items: &[CatalogItem],
        promotions: &[Promotion],
    ) -> Result<Money<'static, Currency>, BasketError> {
        self.entries
            .iter()
            .try_fold(Money::from_minor(0, self.currency), |total, entry| {
                let Some(item) = find_item(items, entry.sku.as_str()) else {
                    warn!(sku = %entry.sku, "basket item missing from catalog, skipping");

                    return Ok(total);
                };

                let line_total = self.line_total(entry, item, promotions)?;

                Ok(total.add(line_total)?)
            })
    }

    /// Price a single entry, applying its promotion if there is one.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::CurrencyMismatch`] if the item price is not in the basket
    /// currency, or [`BasketError::Overflow`] if the line price is out of range.
    pub fn line_total(
        &self,
        entry: &BasketEntry,
        item: &CatalogItem,
        promotions: &[Promotion],
    ) -> Result<Money<'static, Currency>, BasketError> {
        let item_currency = item.price().currency();

        if item_currency != self.currency {
            return Err(BasketError::CurrencyMismatch(
                entry.sku.clone(),
                item_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        let line_total = match find_promotion(promotions, entry.sku.as_str()) {
            Some(promotion) => promotion.apply(entry.quantity, item.price()),
            None => line_price(entry.quantity, item.price()),
        };

        line_total.ok_or_else(|| BasketError::Overflow(entry.sku.clone()))
    }

    /// Get the number of distinct SKUs in the basket.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the currency of the basket.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn entry_mut(&mut self, sku: &str) -> Option<&mut BasketEntry> {
        self.entries.iter_mut().find(|entry| entry.sku == *sku)
    }
}
