//! Receipt
//!
//! Price details for a checkout, rendered as a table followed by a summary.

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::checkout::{Checkout, CheckoutTotals, DeliveryOption};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("Failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// Price details for a checkout.
#[derive(Debug, Clone)]
pub struct Receipt<'c, 'a> {
    checkout: &'c Checkout<'a>,
    delivery: DeliveryOption,
    totals: CheckoutTotals<'a>,
}

impl<'c, 'a> Receipt<'c, 'a> {
    /// Build the receipt for a checkout and delivery option.
    pub fn from_checkout(checkout: &'c Checkout<'a>, delivery: DeliveryOption) -> Self {
        Self {
            checkout,
            delivery,
            totals: checkout.totals(delivery),
        }
    }

    /// The computed totals.
    pub fn totals(&self) -> &CheckoutTotals<'a> {
        &self.totals
    }

    /// Write the receipt.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Seller", "Qty", "Price", "MRP", "Line Total"]);

        for line in self.checkout.lines() {
            let product = line.product();

            builder.push_record([
                product.name.clone(),
                product
                    .seller
                    .as_ref()
                    .map_or_else(|| "-".to_string(), |seller| seller.name.clone()),
                line.quantity().to_string(),
                product.price.to_string(),
                product.original_price_or_price().to_string(),
                line.subtotal().to_string(),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(
            1,
            HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
        );

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..6), Alignment::right());

        writeln!(out, "\n{table}")?;

        self.write_summary(&mut out)?;

        Ok(())
    }

    fn write_summary(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let totals = &self.totals;

        let delivery = if totals.delivery.to_minor_units() == 0 {
            "FREE".to_string()
        } else {
            totals.delivery.to_string()
        };

        let rows = [
            (format!(" Price ({} items):", totals.item_count), totals.subtotal.to_string()),
            (" Discount:".to_string(), format!("-{}", totals.discount)),
            (format!(" {}:", self.delivery.name()), delivery),
            (" Total Amount:".to_string(), totals.total.to_string()),
        ];

        let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
        let value_width = rows.iter().map(|(_, value)| value.chars().count()).max().unwrap_or(0);

        for (label, value) in &rows {
            writeln!(out, "{label:<label_width$} {value:>value_width$}")?;
        }

        if totals.discount.to_minor_units() > 0 {
            writeln!(out, " You will save {} on this order", totals.discount)?;
        }

        writeln!(out)?;

        Ok(())
    }
}
