//! Checkout
//!
//! A read-only snapshot of the lines being purchased, taken either from the cart
//! or from a single "buy now" product, and the totals handed to order submission.

use std::fmt;

use clap::ValueEnum;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    cart::{Cart, CartLine},
    orders::{OrderLine, OrderPayload, PaymentMethod, ShippingAddress, UserId},
    pricing::{original_total_price, total_price, total_quantity, total_savings},
    products::Product,
};

/// Errors entering checkout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout cannot start from an empty cart.
    #[error("cart is empty")]
    EmptyCart,
}

/// Where the checkout lines came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutSource {
    /// The whole cart
    Cart,

    /// A single product bought directly
    BuyNow,
}

/// Delivery speed chosen at checkout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DeliveryOption {
    /// Free standard delivery
    #[default]
    Standard,

    /// Fast delivery with tracking
    Express,

    /// Fastest delivery available
    Priority,
}

impl DeliveryOption {
    /// Every option, cheapest first.
    pub const ALL: [DeliveryOption; 3] = [Self::Standard, Self::Express, Self::Priority];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "Standard Delivery",
            Self::Express => "Express Delivery",
            Self::Priority => "Priority Delivery",
        }
    }

    /// Expected delivery time
    pub fn estimate(self) -> &'static str {
        match self {
            Self::Standard => "5-7 business days",
            Self::Express => "2-3 business days",
            Self::Priority => "Next business day",
        }
    }

    /// Charge in major currency units.
    pub fn charge_major(self) -> i64 {
        match self {
            Self::Standard => 0,
            Self::Express => 99,
            Self::Priority => 199,
        }
    }

    /// Charge in the given currency.
    pub fn charge<'a>(self, currency: &'a Currency) -> Money<'a, Currency> {
        let scale = 10_i64.pow(currency.exponent);

        Money::from_minor(self.charge_major() * scale, currency)
    }
}

impl fmt::Display for DeliveryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Price breakdown for a checkout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckoutTotals<'a> {
    /// Total number of units
    pub item_count: u64,

    /// Price before discounts
    pub subtotal: Money<'a, Currency>,

    /// Discount from original prices
    pub discount: Money<'a, Currency>,

    /// Delivery charge
    pub delivery: Money<'a, Currency>,

    /// Amount payable: `subtotal − discount + delivery`
    pub total: Money<'a, Currency>,
}

/// Checkout snapshot
#[derive(Debug, Clone)]
pub struct Checkout<'a> {
    lines: Vec<CartLine<'a>>,
    source: CheckoutSource,
    currency: &'a Currency,
}

impl<'a> Checkout<'a> {
    /// Snapshot the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart has no lines.
    pub fn from_cart(cart: &Cart<'a>) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        Ok(Self {
            lines: cart.lines().to_vec(),
            source: CheckoutSource::Cart,
            currency: cart.currency(),
        })
    }

    /// Check out a single unit of `product`, bypassing the cart.
    pub fn buy_now(product: Product<'a>) -> Self {
        let currency = product.currency();

        Self {
            lines: vec![CartLine::single(product)],
            source: CheckoutSource::BuyNow,
            currency,
        }
    }

    /// Lines being purchased.
    pub fn lines(&self) -> &[CartLine<'a>] {
        &self.lines
    }

    /// Where the lines came from.
    pub fn source(&self) -> CheckoutSource {
        self.source
    }

    /// Currency of all amounts.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Sum of `price × quantity`.
    pub fn total(&self) -> Money<'a, Currency> {
        total_price(&self.lines, self.currency)
    }

    /// Sum of `(original price − price) × quantity`.
    pub fn savings(&self) -> Money<'a, Currency> {
        total_savings(&self.lines, self.currency)
    }

    /// Price breakdown including the delivery charge.
    pub fn totals(&self, delivery: DeliveryOption) -> CheckoutTotals<'a> {
        let delivery = delivery.charge(self.currency);
        let payable = self.total().to_minor_units().saturating_add(delivery.to_minor_units());

        CheckoutTotals {
            item_count: total_quantity(&self.lines),
            subtotal: original_total_price(&self.lines, self.currency),
            discount: self.savings(),
            delivery,
            total: Money::from_minor(payable, self.currency),
        }
    }

    /// Build the order submission payload.
    pub fn into_order(
        self,
        user_id: UserId,
        address: ShippingAddress,
        payment_method: PaymentMethod,
        delivery: DeliveryOption,
    ) -> OrderPayload {
        let totals = self.totals(delivery);

        OrderPayload {
            user_id,
            address,
            lines: self.lines.iter().map(OrderLine::from).collect(),
            payment_method,
            delivery,
            currency: self.currency.iso_alpha_code,
            subtotal: totals.subtotal.to_minor_units(),
            discount: totals.discount.to_minor_units(),
            total: totals.total.to_minor_units(),
        }
    }
}
