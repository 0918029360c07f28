//! Storefront
//!
//! Composition root tying inventory, promotions, and the basket together. A storefront
//! is built once from a [`Seed`] and handed to whatever presents it.

use std::path::Path;

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::info;

use crate::{
    basket::{BasketEntry, BasketError},
    catalog::CatalogItem,
    coordinator::BasketCoordinator,
    inventory::InventoryProvider,
    promotions::{Promotion, PromotionError, provider::PromotionProvider},
    receipt::Receipt,
    seed::{Seed, SeedError},
};

/// Errors raised while setting up a storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The seed could not be read.
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// The promotion configuration is broken.
    #[error(transparent)]
    Promotion(#[from] PromotionError),
}

/// A shop: catalog, promotions, and one basket.
#[derive(Debug, Clone)]
pub struct Storefront {
    coordinator: BasketCoordinator,
    promotions: PromotionProvider,
}

impl Storefront {
    /// Build an unloaded storefront from seed data.
    pub fn new(seed: Seed) -> Self {
        let (currency, catalog, promotions) = seed.into_parts();

        Self {
            coordinator: BasketCoordinator::new(InventoryProvider::new(catalog), currency),
            promotions: PromotionProvider::new(promotions),
        }
    }

    /// Build and initialise a storefront from seed data.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Promotion`] if the promotion configuration names an
    /// unknown promotion type.
    pub fn open(seed: Seed) -> Result<Self, StorefrontError> {
        let mut storefront = Self::new(seed);

        storefront.init()?;

        Ok(storefront)
    }

    /// Read a YAML seed file and open a storefront from it.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Seed`] if the seed cannot be read or parsed, or
    /// [`StorefrontError::Promotion`] if it names an unknown promotion type.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StorefrontError> {
        Self::open(Seed::from_path(path)?)
    }

    /// Load the inventory and the promotions.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Promotion`] if the promotion configuration names an
    /// unknown promotion type.
    pub fn init(&mut self) -> Result<(), StorefrontError> {
        self.coordinator.inventory_mut().load();
        self.promotions.load()?;

        info!(
            items = self.catalog().len(),
            promotions = self.promotions().len(),
            "storefront initialised"
        );

        Ok(())
    }

    /// Catalog items, in catalog order.
    pub fn catalog(&self) -> &[CatalogItem] {
        self.coordinator.inventory().all_items()
    }

    /// Look up a catalog item by SKU.
    pub fn item(&self, sku: &str) -> Option<&CatalogItem> {
        self.coordinator.inventory().item(sku)
    }

    /// Loaded promotions, in configuration order.
    pub fn promotions(&self) -> &[Promotion] {
        self.promotions.promotions()
    }

    /// Look up the promotion for a SKU.
    pub fn promotion_for_sku(&self, sku: &str) -> Option<&Promotion> {
        self.promotions.promotion_for_sku(sku)
    }

    /// Switch the promotion for a SKU on or off, returning whether one exists.
    pub fn set_promotion_active(&mut self, sku: &str, active: bool) -> bool {
        self.promotions.set_active(sku, active)
    }

    /// Flip the promotion for a SKU, returning its new state.
    pub fn toggle_promotion(&mut self, sku: &str) -> Option<bool> {
        self.promotions.toggle(sku)
    }

    /// Add one unit of `sku` to the basket.
    pub fn add_item(&mut self, sku: &str) {
        self.coordinator.add_item(sku);
    }

    /// Remove one unit of `sku` from the basket.
    pub fn remove_item(&mut self, sku: &str) {
        self.coordinator.remove_item(sku);
    }

    /// Number of units of `sku` in the basket.
    pub fn item_count(&self, sku: &str) -> u32 {
        self.coordinator.item_count(sku)
    }

    /// Copy of the basket contents, in insertion order.
    pub fn basket_items(&self) -> Vec<BasketEntry> {
        self.coordinator.basket_items()
    }

    /// Basket total with the current promotions.
    ///
    /// # Errors
    ///
    /// Returns a [`BasketError`] if a catalog price is not in the basket currency or a
    /// line price is out of range.
    pub fn total(&self) -> Result<Money<'static, Currency>, BasketError> {
        self.coordinator.total(self.promotions.promotions())
    }

    /// Per-line breakdown of the basket with the current promotions.
    ///
    /// # Errors
    ///
    /// Returns a [`BasketError`] if a catalog price is not in the basket currency or a
    /// line price is out of range.
    pub fn receipt(&self) -> Result<Receipt, BasketError> {
        Receipt::build(&self.coordinator, self.promotions.promotions())
    }
}
