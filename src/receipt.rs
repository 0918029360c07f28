//! Receipt
//!
//! Per-line view of a basket for display, with two-decimal formatting.

use std::io;

use rust_decimal::RoundingStrategy;
use rusty_money::{Money, MoneyError, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    basket::BasketError,
    catalog::Sku,
    coordinator::BasketCoordinator,
    pricing::line_price,
    promotions::{Promotion, PromotionKind, find_promotion},
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A single basket line as shown to the shopper.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    /// Item SKU
    pub sku: Sku,

    /// Item display name
    pub name: String,

    /// Units in the basket
    pub quantity: u32,

    /// Catalog price per unit
    pub unit_price: Money<'static, Currency>,

    /// Price of the line after any active promotion
    pub line_total: Money<'static, Currency>,

    /// Promotion that priced the line, if one is active
    pub promotion: Option<PromotionKind>,
}

/// Basket breakdown with totals.
#[derive(Debug, Clone)]
pub struct Receipt {
    lines: Vec<ReceiptLine>,
    subtotal: Money<'static, Currency>,
    total: Money<'static, Currency>,
}

impl Receipt {
    /// Build a receipt for the coordinator's basket.
    ///
    /// Basket entries whose SKU is not in the catalog are left out, matching the total.
    ///
    /// # Errors
    ///
    /// Returns a [`BasketError`] if a catalog price is not in the basket currency or a
    /// line price is out of range.
    pub fn build(
        coordinator: &BasketCoordinator,
        promotions: &[Promotion],
    ) -> Result<Self, BasketError> {
        let basket = coordinator.basket();
        let inventory = coordinator.inventory();

        let mut lines = Vec::with_capacity(basket.len());
        let mut subtotal = Money::from_minor(0, basket.currency());
        let mut total = Money::from_minor(0, basket.currency());

        for entry in basket.iter() {
            let Some(item) = inventory.item(entry.sku.as_str()) else {
                continue;
            };

            let line_total = basket.line_total(entry, item, promotions)?;

            let full_price = line_price(entry.quantity, item.price())
                .ok_or_else(|| BasketError::Overflow(entry.sku.clone()))?;

            subtotal = subtotal.add(full_price)?;
            total = total.add(line_total)?;

            let promotion = find_promotion(promotions, entry.sku.as_str())
                .filter(|promotion| promotion.is_active())
                .map(Promotion::kind);

            lines.push(ReceiptLine {
                sku: entry.sku.clone(),
                name: item.name().to_string(),
                quantity: entry.quantity,
                unit_price: *item.price(),
                line_total,
                promotion,
            });
        }

        Ok(Self {
            lines,
            subtotal,
            total,
        })
    }

    /// Lines in basket order.
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Total cost before any promotion applications
    pub fn subtotal(&self) -> Money<'static, Currency> {
        self.subtotal
    }

    /// Total amount to pay
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// Calculate the savings made by applying promotions.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'static, Currency>, MoneyError> {
        self.subtotal.sub(self.total)
    }

    /// Whether the receipt has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the receipt as a table followed by its totals.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        if self.is_empty() {
            writeln!(out, "Your basket is empty")?;
            writeln!(out, "Total: {}", format_money(&self.total))?;

            return Ok(());
        }

        let mut builder = Builder::default();

        builder.push_record(
            ["SKU", "Item", "Qty", "Unit price", "Promotion", "Line total"].map(String::from),
        );

        for line in &self.lines {
            builder.push_record([
                line.sku.to_string(),
                line.name.clone(),
                line.quantity.to_string(),
                format_money(&line.unit_price),
                line.promotion
                    .map_or_else(String::new, |kind| kind.as_str().to_owned()),
                format_money(&line.line_total),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(2..4), Alignment::right());
        table.modify(Columns::new(5..6), Alignment::right());

        writeln!(out, "{table}")?;
        writeln!(out, "Subtotal: {}", format_money(&self.subtotal))?;
        writeln!(out, "Savings:  {}", format_money(&self.savings()?))?;
        writeln!(out, "Total:    {}", format_money(&self.total))?;

        Ok(())
    }
}

/// Format money with exactly two decimal places, rounding half away from zero.
pub fn format_money(money: &Money<'_, Currency>) -> String {
    let rounded = money
        .amount()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    format!("{rounded:.2} {}", money.currency().iso_alpha_code)
}
