//! Basket Coordinator

use rusty_money::{Money, iso::Currency};

use crate::{
    basket::{Basket, BasketEntry, BasketError},
    inventory::InventoryProvider,
    promotions::Promotion,
};

/// Pairs the inventory with a basket for the presentation layer.
#[derive(Debug, Clone)]
pub struct BasketCoordinator {
    inventory: InventoryProvider,
    basket: Basket,
}

impl BasketCoordinator {
    /// Create a new coordinator with an empty basket.
    pub fn new(inventory: InventoryProvider, currency: &'static Currency) -> Self {
        Self {
            inventory,
            basket: Basket::new(currency),
        }
    }

    /// Add one unit of `sku` to the basket.
    pub fn add_item(&mut self, sku: &str) {
        self.basket.add_item(sku);
    }

    /// Remove one unit of `sku` from the basket.
    pub fn remove_item(&mut self, sku: &str) {
        self.basket.remove_item(sku);
    }

    /// Number of units of `sku` in the basket.
    pub fn item_count(&self, sku: &str) -> u32 {
        self.basket.item_count(sku)
    }

    /// Total of the basket against the current catalog and the given promotions.
    ///
    /// # Errors
    ///
    /// Returns a [`BasketError`] if a catalog price is not in the basket currency or a
    /// line price is out of range.
    pub fn total(&self, promotions: &[Promotion]) -> Result<Money<'static, Currency>, BasketError> {
        self.basket.calculate_total(self.inventory.all_items(), promotions)
    }

    /// Copy of the basket contents, in insertion order.
    pub fn basket_items(&self) -> Vec<BasketEntry> {
        self.basket.all_items()
    }

    /// Whether the basket holds no items.
    pub fn is_empty(&self) -> bool {
        self.basket.is_empty()
    }

    /// The inventory backing the basket.
    pub fn inventory(&self) -> &InventoryProvider {
        &self.inventory
    }

    /// The inventory backing the basket, mutably.
    pub fn inventory_mut(&mut self) -> &mut InventoryProvider {
        &mut self.inventory
    }

    /// The underlying basket.
    pub fn basket(&self) -> &Basket {
        &self.basket
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::EUR;
    use testresult::TestResult;

    use crate::{catalog::CatalogItem, promotions::PromotionKind};

    use super::*;

    fn coordinator() -> BasketCoordinator {
        let mut inventory = InventoryProvider::new(vec![
            CatalogItem::new("A0001", "Artikel A0001", Money::from_minor(1299, EUR)),
            CatalogItem::new("A0002", "Artikel A0002", Money::from_minor(399, EUR)),
        ]);
        inventory.load();

        BasketCoordinator::new(inventory, EUR)
    }

    #[test]
    fn mutations_forward_to_basket() {
        let mut coordinator = coordinator();

        coordinator.add_item("A0001");
        coordinator.add_item("A0001");
        coordinator.remove_item("A0001");
        coordinator.remove_item("A0002");

        assert_eq!(coordinator.item_count("A0001"), 1);
        assert_eq!(coordinator.item_count("A0002"), 0);
        assert_eq!(coordinator.basket().len(), 1);
    }

    #[test]
    fn total_uses_current_catalog() -> TestResult {
        let mut coordinator = coordinator();
        coordinator.add_item("A0002");
        coordinator.add_item("A0002");

        let promotions = [Promotion::new("A0002", PromotionKind::BuyOneGetOneFree)];

        assert_eq!(coordinator.total(&promotions)?, Money::from_minor(399, EUR));
        assert_eq!(coordinator.total(&[])?, Money::from_minor(798, EUR));

        Ok(())
    }

    #[test]
    fn total_is_zero_before_inventory_load() -> TestResult {
        let inventory = InventoryProvider::new(vec![CatalogItem::new(
            "A0001",
            "Artikel A0001",
            Money::from_minor(1299, EUR),
        )]);
        let mut coordinator = BasketCoordinator::new(inventory, EUR);
        coordinator.add_item("A0001");

        assert_eq!(coordinator.total(&[])?, Money::from_minor(0, EUR));

        coordinator.inventory_mut().load();

        assert_eq!(coordinator.total(&[])?, Money::from_minor(1299, EUR));

        Ok(())
    }

    #[test]
    fn basket_items_is_an_ordered_copy() {
        let mut coordinator = coordinator();
        coordinator.add_item("A0002");
        coordinator.add_item("A0001");
        coordinator.add_item("A0002");

        let items = coordinator.basket_items();

        assert_eq!(
            items,
            [
                BasketEntry {
                    sku: "A0002".into(),
                    quantity: 2,
                },
                BasketEntry {
                    sku: "A0001".into(),
                    quantity: 1,
                },
            ]
        );
        assert!(!coordinator.is_empty());
    }
}
