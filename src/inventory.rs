//! Inventory

use tracing::debug;

use crate::catalog::{CatalogItem, find_item};

/// Queryable view over a fixed catalog source.
///
/// The provider is empty until [`InventoryProvider::load`] is called.
#[derive(Debug, Clone, Default)]
pub struct InventoryProvider {
    source: Vec<CatalogItem>,
    items: Vec<CatalogItem>,
}

impl InventoryProvider {
    /// Create a new provider over the given catalog source.
    pub fn new(source: Vec<CatalogItem>) -> Self {
        Self {
            source,
            items: Vec::new(),
        }
    }

    /// Replace the current items with the catalog source.
    pub fn load(&mut self) {
        self.items.clone_from(&self.source);

        debug!(items = self.items.len(), "loaded inventory");
    }

    /// All loaded items, in catalog order.
    pub fn all_items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up a loaded item by SKU.
    pub fn item(&self, sku: &str) -> Option<&CatalogItem> {
        find_item(&self.items, sku)
    }
}
