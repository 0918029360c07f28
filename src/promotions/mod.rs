//! Promotions

use std::{fmt, str::FromStr};

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    catalog::Sku,
    promotions::types::{BuyOneGetOneFree, TenPercentOff},
};

pub mod provider;
pub mod types;

/// Errors raised while building promotions from configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromotionError {
    /// A configuration entry names a promotion type that does not exist.
    #[error("Unknown promotion type: {0}")]
    UnknownPromotionType(String),
}

/// The kinds of promotion that can be configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionKind {
    /// Every second unit is free.
    BuyOneGetOneFree,

    /// Ten percent off every unit.
    TenPercentOff,
}

impl PromotionKind {
    /// Configuration name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            PromotionKind::BuyOneGetOneFree => "buyOneGetOneFree",
            PromotionKind::TenPercentOff => "tenPercentOff",
        }
    }
}

impl FromStr for PromotionKind {
    type Err = PromotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyOneGetOneFree" => Ok(PromotionKind::BuyOneGetOneFree),
            "tenPercentOff" => Ok(PromotionKind::TenPercentOff),
            other => Err(PromotionError::UnknownPromotionType(other.to_string())),
        }
    }
}

impl fmt::Display for PromotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-SKU promotion rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Promotion {
    /// Buy One Get One Free Promotion
    BuyOneGetOneFree(BuyOneGetOneFree),

    /// Ten Percent Off Promotion
    TenPercentOff(TenPercentOff),
}

impl Promotion {
    /// Create a new, active promotion of the given kind.
    pub fn new(sku: impl Into<Sku>, kind: PromotionKind) -> Self {
        match kind {
            PromotionKind::BuyOneGetOneFree => {
                Promotion::BuyOneGetOneFree(BuyOneGetOneFree::new(sku))
            }
            PromotionKind::TenPercentOff => Promotion::TenPercentOff(TenPercentOff::new(sku)),
        }
    }

    /// Return the promoted SKU.
    pub fn sku(&self) -> &Sku {
        match self {
            Promotion::BuyOneGetOneFree(promo) => promo.sku(),
            Promotion::TenPercentOff(promo) => promo.sku(),
        }
    }

    /// Return the kind of promotion.
    pub fn kind(&self) -> PromotionKind {
        match self {
            Promotion::BuyOneGetOneFree(_) => PromotionKind::BuyOneGetOneFree,
            Promotion::TenPercentOff(_) => PromotionKind::TenPercentOff,
        }
    }

    /// Whether the promotion is currently applied.
    pub fn is_active(&self) -> bool {
        match self {
            Promotion::BuyOneGetOneFree(promo) => promo.is_active(),
            Promotion::TenPercentOff(promo) => promo.is_active(),
        }
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        match self {
            Promotion::BuyOneGetOneFree(promo) => promo.set_active(active),
            Promotion::TenPercentOff(promo) => promo.set_active(active),
        }
    }

    /// Price `count` units at `unit_price`.
    ///
    /// An inactive promotion charges the full line price, so callers never need to check
    /// [`Promotion::is_active`] first. Returns `None` if the price overflows.
    pub fn apply<'a>(
        &self,
        count: u32,
        unit_price: &Money<'a, Currency>,
    ) -> Option<Money<'a, Currency>> {
        match self {
            Promotion::BuyOneGetOneFree(promo) => promo.apply(count, unit_price),
            Promotion::TenPercentOff(promo) => promo.apply(count, unit_price),
        }
    }
}

/// Returns the first promotion in `promotions` for the given SKU.
pub fn find_promotion<'p>(promotions: &'p [Promotion], sku: &str) -> Option<&'p Promotion> {
    promotions.iter().find(|promo| *promo.sku() == *sku)
}
