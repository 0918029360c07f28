//! Buy One Get One Free
//!
//! Every second unit of the promoted SKU is free.

use rusty_money::{Money, iso::Currency};

use crate::{catalog::Sku, pricing::line_price};

/// Buy one, get one free on a single SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyOneGetOneFree {
    sku: Sku,
    active: bool,
}

impl BuyOneGetOneFree {
    /// Create a new, active promotion for the given SKU.
    pub fn new(sku: impl Into<Sku>) -> Self {
        Self {
            sku: sku.into(),
            active: true,
        }
    }

    /// Return the promoted SKU
    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    /// Whether the promotion is currently applied.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Price `count` units at `unit_price`.
    ///
    /// Half of the units, rounded down, are free; an odd unit out is paid for. Returns
    /// `None` if the price overflows.
    pub fn apply<'a>(
        &self,
        count: u32,
        unit_price: &Money<'a, Currency>,
    ) -> Option<Money<'a, Currency>> {
        if !self.active {
            return line_price(count, unit_price);
        }

        let free_items = count / 2;

        line_price(count - free_items, unit_price)
    }
}
