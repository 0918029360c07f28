//! Pricing

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

/// Calculates the undiscounted price of `count` units at `unit_price`.
///
/// Returns `None` if the amount does not fit in a [`Decimal`].
pub fn line_price<'a>(
    count: u32,
    unit_price: &Money<'a, Currency>,
) -> Option<Money<'a, Currency>> {
    scaled_price(count, unit_price, Decimal::ONE)
}

/// Calculates the price of `count` units at `unit_price`, multiplied by `factor`.
///
/// No rounding is applied; the result keeps every decimal place. Returns `None` if the
/// amount does not fit in a [`Decimal`].
pub fn scaled_price<'a>(
    count: u32,
    unit_price: &Money<'a, Currency>,
    factor: Decimal,
) -> Option<Money<'a, Currency>> {
    let amount = unit_price
        .amount()
        .checked_mul(Decimal::from(count))?
        .checked_mul(factor)?;

    Some(Money::from_decimal(amount, unit_price.currency()))
}
