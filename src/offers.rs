//! Seller offers
//!
//! Several sellers can list the same product at different prices. Picking an
//! offer yields the product priced and attributed to that seller.

use std::fmt;

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::{
    products::{Product, ProductId},
    sellers::Seller,
    wholesale::discount_percent,
};

/// Estimated delivery window in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryEstimate {
    /// Earliest day
    pub min_days: u8,

    /// Latest day
    pub max_days: u8,
}

impl DeliveryEstimate {
    /// Creates an estimate, swapping the bounds if given in the wrong order.
    pub fn new(min_days: u8, max_days: u8) -> Self {
        Self {
            min_days: min_days.min(max_days),
            max_days: min_days.max(max_days),
        }
    }
}

impl fmt::Display for DeliveryEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} days", self.min_days, self.max_days)
    }
}

/// One seller's price for a product.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerOffer<'a> {
    /// Seller making the offer
    pub seller: Seller,

    /// Offer price
    pub price: Money<'a, Currency>,

    /// Price before discount
    pub original_price: Option<Money<'a, Currency>>,

    /// Delivery window
    pub delivery: DeliveryEstimate,
}

impl<'a> SellerOffer<'a> {
    /// Rounded percentage off the original price.
    pub fn discount_percent(&self) -> u32 {
        self.original_price
            .map_or(0, |original| discount_percent(&original, &self.price))
    }

    /// The base product, priced and attributed to this seller.
    pub fn product_for(&self, base: &Product<'a>) -> Product<'a> {
        Product {
            price: self.price,
            original_price: self.original_price,
            seller: Some(self.seller.clone()),
            ..base.clone()
        }
    }
}

/// The offers for a single product.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerOffers<'a> {
    product: ProductId,
    offers: SmallVec<[SellerOffer<'a>; 4]>,
}

impl<'a> SellerOffers<'a> {
    /// Creates the offer list for a product.
    pub fn new(product: ProductId, offers: impl IntoIterator<Item = SellerOffer<'a>>) -> Self {
        Self {
            product,
            offers: offers.into_iter().collect(),
        }
    }

    /// Product the offers are for.
    pub fn product(&self) -> ProductId {
        self.product
    }

    /// The cheapest offer; the first listed wins a tie.
    pub fn best_value(&self) -> Option<&SellerOffer<'a>> {
        self.offers.iter().reduce(|best, offer| {
            if offer.price.to_minor_units() < best.price.to_minor_units() {
                offer
            } else {
                best
            }
        })
    }

    /// Iterate over the offers in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &SellerOffer<'a>> {
        self.offers.iter()
    }

    /// Number of offers.
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Returns true if nobody offers the product.
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}
