//! Orders
//!
//! The order submission boundary: the payload built at checkout, the gateway it
//! is sent to, and the status an order moves through afterwards.

use std::fmt;

use clap::ValueEnum;
use rand::Rng;

use crate::{cart::CartLine, checkout::DeliveryOption, products::ProductId, sellers::SellerId};

pub mod gateway;
pub mod status;

pub use gateway::{OrderError, OrderGateway, SimulatedOrderGateway};
pub use status::{OrderFilter, OrderStatus};

/// Prefix of every generated order identifier.
pub const ORDER_ID_PREFIX: &str = "ORD";

/// Identifier of the user placing the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(String);

impl UserId {
    /// Creates a new user identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Order identifier returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    /// Generate an identifier: [`ORDER_ID_PREFIX`] followed by a six digit number.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let number: u32 = rng.gen_range(100_000..=999_999);

        Self(format!("{ORDER_ID_PREFIX}{number}"))
    }

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the order is paid for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PaymentMethod {
    /// UPI transfer
    #[default]
    Upi,

    /// Credit or debit card
    Card,

    /// Net banking
    NetBanking,

    /// Cash on delivery
    #[value(name = "cod")]
    CashOnDelivery,
}

impl PaymentMethod {
    /// Label sent with the order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Upi => "UPI",
            Self::Card => "Credit/Debit Card",
            Self::NetBanking => "Net Banking",
            Self::CashOnDelivery => "Cash on Delivery",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of shipping address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    /// Home address
    Home,

    /// Office address
    Office,
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("Home"),
            Self::Office => f.write_str("Office"),
        }
    }
}

/// Where the order is shipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingAddress {
    /// Recipient name
    pub name: String,

    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// Address kind
    pub kind: AddressType,
}

/// One purchased line, with the unit price in minor units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// Product identifier
    pub product_id: ProductId,

    /// Product name at the time of ordering
    pub name: String,

    /// Units ordered
    pub quantity: u32,

    /// Unit price in minor units
    pub unit_price: i64,

    /// Seller of the product, if known
    pub seller_id: Option<SellerId>,
}

impl From<&CartLine<'_>> for OrderLine {
    fn from(line: &CartLine<'_>) -> Self {
        let product = line.product();

        Self {
            product_id: product.id,
            name: product.name.clone(),
            quantity: line.quantity(),
            unit_price: product.price.to_minor_units(),
            seller_id: product.seller.as_ref().map(|seller| seller.id),
        }
    }
}

/// Order submission payload. Amounts are in minor units of `currency`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPayload {
    /// User placing the order
    pub user_id: UserId,

    /// Shipping address
    pub address: ShippingAddress,

    /// Purchased lines
    pub lines: Vec<OrderLine>,

    /// Payment method
    pub payment_method: PaymentMethod,

    /// Delivery option
    pub delivery: DeliveryOption,

    /// ISO currency code
    pub currency: &'static str,

    /// Price before discounts
    pub subtotal: i64,

    /// Discount from original prices
    pub discount: i64,

    /// Amount payable, including delivery
    pub total: i64,
}

/// Gateway response to a placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Whether the order was accepted
    pub success: bool,

    /// Identifier of the new order
    pub order_id: OrderId,
}
