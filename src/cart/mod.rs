//! Cart
//!
//! An explicitly owned cart of product lines. Every line carries a product and a
//! non-zero quantity, there is at most one line per product, and all lines are
//! priced in the cart currency.

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::groups::{SellerGroup, group_by_seller},
    pricing::{original_total_price, total_price, total_quantity, total_savings},
    products::{Product, ProductId},
};

pub mod groups;

/// Errors related to cart construction or mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A product's currency differs from the cart currency (product, product currency, cart currency).
    #[error("Product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// A product and the quantity requested.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    product: Product<'a>,
    quantity: NonZeroU32,
}

impl<'a> CartLine<'a> {
    /// Creates a new line.
    pub fn new(product: Product<'a>, quantity: NonZeroU32) -> Self {
        Self { product, quantity }
    }

    /// Creates a line with a quantity of one.
    pub fn single(product: Product<'a>) -> Self {
        Self::new(product, NonZeroU32::MIN)
    }

    /// Returns the product of the line
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Returns the product identifier of the line
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Returns the quantity of the line
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// `price × quantity`
    pub fn subtotal(&self) -> Money<'a, Currency> {
        Money::from_minor(self.subtotal_minor(), self.product.currency())
    }

    /// `price × quantity`, in minor units, saturating at `i64::MAX`.
    pub fn subtotal_minor(&self) -> i64 {
        self.product
            .price
            .to_minor_units()
            .saturating_mul(i64::from(self.quantity.get()))
    }

    /// `original price × quantity`, in minor units.
    ///
    /// An original price below the current price counts as the current price,
    /// so this is always `subtotal + savings`.
    pub fn original_subtotal_minor(&self) -> i64 {
        self.subtotal_minor().saturating_add(self.savings_minor())
    }

    /// `(original price − price) × quantity`, in minor units, never negative.
    pub fn savings_minor(&self) -> i64 {
        self.product
            .unit_savings_minor()
            .saturating_mul(i64::from(self.quantity.get()))
    }

    fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }
}

/// Cart
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    lines: Vec<CartLine<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create a new, empty cart.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Create a pre-seeded cart.
    ///
    /// Lines for the same product are merged by summing their quantities.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if any line is priced in another currency.
    pub fn with_lines(
        lines: impl IntoIterator<Item = CartLine<'a>>,
        currency: &'static Currency,
    ) -> Result<Self, CartError> {
        let mut cart = Cart::new(currency);

        for line in lines {
            cart.check_currency(&line.product)?;

            match cart.position(line.product_id()) {
                Some(idx) => {
                    if let Some(existing) = cart.lines.get_mut(idx) {
                        existing.quantity = existing.quantity.saturating_add(line.quantity.get());
                    }
                }
                None => cart.lines.push(line),
            }
        }

        Ok(cart)
    }

    /// Adds one unit of `product`, appending a new line if the product is not
    /// in the cart yet. Returns the line's new quantity.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if the product is priced in another currency. The
    /// cart is left unchanged.
    #[tracing::instrument(
        name = "cart.add_or_increment",
        skip(self, product),
        fields(product_id = %product.id),
        err
    )]
    pub fn add_or_increment(&mut self, product: &Product<'a>) -> Result<u32, CartError> {
        self.check_currency(product)?;

        let quantity = if let Some(line) = self.line_mut(product.id) {
            line.increment();
            line.quantity()
        } else {
            self.lines.push(CartLine::single(product.clone()));
            1
        };

        debug!(quantity, "added product to cart");

        Ok(quantity)
    }

    /// Replaces the quantity of a line; a quantity of zero removes it.
    ///
    /// Returns `false` if the product is not in the cart, in which case nothing changes.
    #[tracing::instrument(name = "cart.set_quantity", skip(self, product), fields(product_id = %product))]
    pub fn set_quantity(&mut self, product: ProductId, quantity: u32) -> bool {
        let Some(quantity) = NonZeroU32::new(quantity) else {
            return self.remove_line(product).is_some();
        };

        let Some(line) = self.line_mut(product) else {
            debug!("product not in cart");

            return false;
        };

        line.quantity = quantity;

        debug!(quantity = quantity.get(), "updated line quantity");

        true
    }

    /// Removes the line for `product`, returning it if present.
    #[tracing::instrument(name = "cart.remove_line", skip(self, product), fields(product_id = %product))]
    pub fn remove_line(&mut self, product: ProductId) -> Option<CartLine<'a>> {
        let removed = self.position(product).map(|idx| self.lines.remove(idx));

        debug!(removed = removed.is_some(), "removed line");

        removed
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        debug!(lines = self.lines.len(), "clearing cart");

        self.lines.clear();
    }

    /// Sum of `price × quantity` over all lines.
    pub fn total(&self) -> Money<'a, Currency> {
        total_price(&self.lines, self.currency)
    }

    /// Sum of `(original price − price) × quantity` over all lines.
    pub fn savings(&self) -> Money<'a, Currency> {
        total_savings(&self.lines, self.currency)
    }

    /// Sum of `original price × quantity` over all lines.
    pub fn original_total(&self) -> Money<'a, Currency> {
        original_total_price(&self.lines, self.currency)
    }

    /// Total number of units in the cart, not the number of lines.
    pub fn count(&self) -> u64 {
        total_quantity(&self.lines)
    }

    /// Partition the lines by seller, in order of first appearance.
    pub fn group_by_seller(&self) -> Vec<SellerGroup<'_, 'a>> {
        group_by_seller(&self.lines, self.currency)
    }

    /// Get the line for a product.
    pub fn line(&self, product: ProductId) -> Option<&CartLine<'a>> {
        self.lines.iter().find(|line| line.product_id() == product)
    }

    /// The lines in the cart, in insertion order.
    pub fn lines(&self) -> &[CartLine<'a>] {
        &self.lines
    }

    /// Iterate over the lines in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine<'a>> {
        self.lines.iter()
    }

    /// Get the number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn position(&self, product: ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.product_id() == product)
    }

    fn line_mut(&mut self, product: ProductId) -> Option<&mut CartLine<'a>> {
        self.lines.iter_mut().find(|line| line.product_id() == product)
    }

    fn check_currency(&self, product: &Product<'a>) -> Result<(), CartError> {
        let product_currency = product.currency();

        if product_currency == self.currency {
            Ok(())
        } else {
            Err(CartError::CurrencyMismatch(
                product.id,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ))
        }
    }
}
