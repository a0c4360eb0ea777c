//! Product Fixtures

use std::num::NonZeroU32;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, INR, USD},
};
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    offers::{DeliveryEstimate, SellerOffer},
    products::{Product, ProductId},
    sellers::{Seller, SellerId},
    wholesale::{PriceTier, PriceTiers, VendorType},
};

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product price (e.g., "4999 INR")
    pub price: String,

    /// Price before discount
    #[serde(default)]
    pub original_price: Option<String>,

    /// Seller identifier, resolved against the fixture's sellers
    #[serde(default)]
    pub seller: Option<SellerId>,

    /// Wholesale tiers
    #[serde(default)]
    pub tiers: Vec<TierFixture>,

    /// Retail, wholesale or both; retail when omitted
    #[serde(default)]
    pub vendor_type: VendorType,
}

/// Wholesale tier fixture
#[derive(Debug, Deserialize)]
pub struct TierFixture {
    /// Minimum quantity
    pub min_quantity: u32,

    /// Unit price (e.g., "4599 INR")
    pub price: String,
}

/// Seller offer fixture
#[derive(Debug, Deserialize)]
pub struct OfferFixture {
    /// Seller identifier
    pub seller: SellerId,

    /// Offer price
    pub price: String,

    /// Price before discount
    #[serde(default)]
    pub original_price: Option<String>,

    /// Delivery window, `[min, max]` days
    pub delivery_days: [u8; 2],
}

impl ProductFixture {
    /// Build the product, resolving its seller.
    ///
    /// # Errors
    ///
    /// Returns an error if a price is malformed, the seller is unknown or a tier
    /// has a zero minimum quantity.
    pub fn try_into_product<'a>(
        self,
        sellers: impl Fn(SellerId) -> Option<Seller>,
    ) -> Result<Product<'a>, FixtureError> {
        let mut product = Product::new(self.id, self.name, parse_money(&self.price)?);

        if let Some(original) = self.original_price.as_deref() {
            product = product.with_original_price(parse_money(original)?);
        }

        if let Some(seller_id) = self.seller {
            let seller = sellers(seller_id).ok_or(FixtureError::SellerNotFound(seller_id))?;

            product = product.with_seller(seller);
        }

        let tiers = self
            .tiers
            .iter()
            .map(|tier| -> Result<PriceTier<'a>, FixtureError> {
                let min_quantity = NonZeroU32::new(tier.min_quantity)
                    .ok_or(FixtureError::InvalidQuantity(self.id))?;

                Ok(PriceTier::new(min_quantity, parse_money(&tier.price)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(product
            .with_tiers(PriceTiers::new(tiers))
            .with_vendor_type(self.vendor_type))
    }
}

impl OfferFixture {
    /// Build the offer, resolving its seller.
    ///
    /// # Errors
    ///
    /// Returns an error if a price is malformed or the seller is unknown.
    pub fn try_into_offer<'a>(
        self,
        sellers: impl Fn(SellerId) -> Option<Seller>,
    ) -> Result<SellerOffer<'a>, FixtureError> {
        let [min_days, max_days] = self.delivery_days;

        Ok(SellerOffer {
            seller: sellers(self.seller).ok_or(FixtureError::SellerNotFound(self.seller))?,
            price: parse_money(&self.price)?,
            original_price: self.original_price.as_deref().map(parse_money).transpose()?,
            delivery: DeliveryEstimate::new(min_days, max_days),
        })
    }
}

/// Parse a price string into money.
///
/// # Errors
///
/// See [`parse_price`].
pub fn parse_money(s: &str) -> Result<Money<'static, Currency>, FixtureError> {
    let (minor_units, currency) = parse_price(s)?;

    Ok(Money::from_minor(minor_units, currency))
}

/// Parse price string (e.g., "4999 INR" or "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "INR" => INR,
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::from(10_i64.pow(currency.exponent)))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}
