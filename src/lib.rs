//! Shopfront
//!
//! Shopfront is a small shopping basket engine: a fixed catalog, per-SKU promotions that
//! can be switched on and off, and a basket that totals itself against both.

pub mod basket;
pub mod catalog;
pub mod coordinator;
pub mod inventory;
pub mod prelude;
pub mod pricing;
pub mod promotions;
pub mod receipt;
pub mod seed;
pub mod storefront;
