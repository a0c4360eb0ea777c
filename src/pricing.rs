//! Pricing
//!
//! Aggregations over cart lines. Callers guarantee every line is priced in
//! `currency`, so the sums are taken directly in minor units. Sums saturate at
//! `i64::MAX` rather than overflow.

use rusty_money::{Money, iso::Currency};

use crate::cart::CartLine;

/// Sum of `price × quantity` over all lines.
pub fn total_price<'a>(lines: &[CartLine<'a>], currency: &'a Currency) -> Money<'a, Currency> {
    Money::from_minor(sum_minor(lines, CartLine::subtotal_minor), currency)
}

/// Sum of `original price × quantity` over all lines, with the original price
/// defaulting to the current price.
pub fn original_total_price<'a>(
    lines: &[CartLine<'a>],
    currency: &'a Currency,
) -> Money<'a, Currency> {
    Money::from_minor(
        sum_minor(lines, CartLine::original_subtotal_minor),
        currency,
    )
}

/// Sum of `(original price − price) × quantity` over all lines.
pub fn total_savings<'a>(lines: &[CartLine<'a>], currency: &'a Currency) -> Money<'a, Currency> {
    Money::from_minor(sum_minor(lines, CartLine::savings_minor), currency)
}

/// Sum of quantities over all lines.
pub fn total_quantity(lines: &[CartLine<'_>]) -> u64 {
    lines.iter().map(|line| u64::from(line.quantity())).sum()
}

fn sum_minor<'a>(lines: &[CartLine<'a>], amount: impl Fn(&CartLine<'a>) -> i64) -> i64 {
    lines
        .iter()
        .map(amount)
        .fold(0, i64::saturating_add)
}
