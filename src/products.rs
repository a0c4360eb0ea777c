//! Products

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    sellers::Seller,
    wholesale::{PriceTiers, VendorType, discount_percent},
};

/// Product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a new product identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product price
    pub price: Money<'a, Currency>,

    /// Price before discount, if the product is discounted
    pub original_price: Option<Money<'a, Currency>>,

    /// Seller offering the product
    pub seller: Option<Seller>,

    /// Wholesale price tiers
    pub tiers: PriceTiers<'a>,

    /// Retail, wholesale or both
    pub vendor_type: VendorType,
}

impl<'a> Product<'a> {
    /// Creates a retail product with no original price, seller or tiers.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money<'a, Currency>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            seller: None,
            tiers: PriceTiers::default(),
            vendor_type: VendorType::Retail,
        }
    }

    /// Sets the price before discount.
    #[must_use]
    pub fn with_original_price(mut self, original_price: Money<'a, Currency>) -> Self {
        self.original_price = Some(original_price);
        self
    }

    /// Sets the seller.
    #[must_use]
    pub fn with_seller(mut self, seller: Seller) -> Self {
        self.seller = Some(seller);
        self
    }

    /// Sets the wholesale price tiers.
    #[must_use]
    pub fn with_tiers(mut self, tiers: PriceTiers<'a>) -> Self {
        self.tiers = tiers;
        self
    }

    /// Sets the vendor type.
    #[must_use]
    pub fn with_vendor_type(mut self, vendor_type: VendorType) -> Self {
        self.vendor_type = vendor_type;
        self
    }

    /// The original price, defaulting to the current price when absent.
    pub fn original_price_or_price(&self) -> Money<'a, Currency> {
        self.original_price.unwrap_or(self.price)
    }

    /// Per-unit savings in minor units, never negative.
    pub fn unit_savings_minor(&self) -> i64 {
        let original = self.original_price_or_price().to_minor_units();

        original.saturating_sub(self.price.to_minor_units()).max(0)
    }

    /// Rounded percentage off the original price.
    pub fn discount_percent(&self) -> u32 {
        discount_percent(&self.original_price_or_price(), &self.price)
    }

    /// Unit price for the given quantity, taking wholesale tiers into account.
    pub fn unit_price_for(&self, quantity: u32) -> Money<'a, Currency> {
        self.tiers.unit_price_for(quantity, self.price)
    }

    /// Currency the product is priced in.
    pub fn currency(&self) -> &'a Currency {
        self.price.currency()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use rusty_money::iso::INR;
    use testresult::TestResult;

    use crate::wholesale::PriceTier;

    use super::*;

    #[test]
    fn original_price_defaults_to_price() {
        let product = Product::new(1, "Smart Fitness Watch", Money::from_minor(12999, INR));

        assert_eq!(product.original_price_or_price(), Money::from_minor(12999, INR));
        assert_eq!(product.unit_savings_minor(), 0);
        assert_eq!(product.discount_percent(), 0);
    }

    #[test]
    fn unit_savings_uses_original_price() {
        let product = Product::new(2, "Smart Fitness Watch", Money::from_minor(12999, INR))
            .with_original_price(Money::from_minor(15999, INR));

        assert_eq!(product.unit_savings_minor(), 3000);
        assert_eq!(product.discount_percent(), 19);
    }

    #[test]
    fn unit_savings_is_clamped_when_original_is_lower() {
        let product = Product::new(3, "Odd Listing", Money::from_minor(500, INR))
            .with_original_price(Money::from_minor(400, INR));

        assert_eq!(product.unit_savings_minor(), 0);
    }

    #[test]
    fn unit_price_for_uses_tiers() -> TestResult {
        let tier_qty = NonZeroU32::new(10).ok_or("non-zero")?;

        let product = Product::new(4, "Bulk Rice", Money::from_minor(1000, INR)).with_tiers(
            PriceTiers::new([PriceTier::new(tier_qty, Money::from_minor(900, INR))]),
        );

        assert_eq!(product.unit_price_for(1), Money::from_minor(1000, INR));
        assert_eq!(product.unit_price_for(12), Money::from_minor(900, INR));

        Ok(())
    }

    #[test]
    fn product_id_display() {
        assert_eq!(ProductId::new(42).to_string(), "42");
        assert_eq!(ProductId::from(42).get(), 42);
    }
}
