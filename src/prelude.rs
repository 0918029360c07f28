//! Shopfront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketEntry, BasketError},
    catalog::{CatalogItem, Sku},
    coordinator::BasketCoordinator,
    inventory::InventoryProvider,
    promotions::{
        Promotion, PromotionError, PromotionKind,
        provider::PromotionProvider,
        types::{BuyOneGetOneFree, TenPercentOff},
    },
    receipt::{Receipt, ReceiptError, ReceiptLine, format_money},
    seed::{PromotionRecord, Seed, SeedError},
    storefront::{Storefront, StorefrontError},
};
