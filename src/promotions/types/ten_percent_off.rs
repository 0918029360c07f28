//! Ten Percent Off

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::{
    catalog::Sku,
    pricing::{line_price, scaled_price},
};

/// Share of the line price paid while the promotion is active.
const PAID_SHARE: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

/// Ten percent off every unit of a single SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenPercentOff {
    sku: Sku,
    active: bool,
}

impl TenPercentOff {
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

    /// Price `count` units at `unit_price`, unrounded. Returns `None` if the price overflows.
    pub fn apply<'a>(
        &self,
        count: u32,
        unit_price: &Money<'a, Currency>,
    ) -> Option<Money<'a, Currency>> {
        if self.active {
            scaled_price(count, unit_price, PAID_SHARE)
        } else {
            line_price(count, unit_price)
        }
    }
}
