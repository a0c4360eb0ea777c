//! Wholesale pricing
//!
//! Bulk price tiers attached to a product, and the rounded discount percentage
//! shown alongside a discounted price.

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use smallvec::SmallVec;

/// Whether a product is listed for retail buyers, wholesale buyers or both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorType {
    /// Sold to retail buyers only
    #[default]
    Retail,

    /// Sold in bulk only
    Wholesale,

    /// Sold both ways
    Both,
}

impl VendorType {
    /// Listed for bulk buyers.
    pub fn is_wholesale(self) -> bool {
        matches!(self, Self::Wholesale | Self::Both)
    }

    /// Listed for retail buyers.
    pub fn is_retail(self) -> bool {
        matches!(self, Self::Retail | Self::Both)
    }
}

/// A unit price that applies from `min_quantity` upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceTier<'a> {
    /// Smallest quantity this tier applies to
    pub min_quantity: NonZeroU32,

    /// Unit price within this tier
    pub price: Money<'a, Currency>,
}

impl<'a> PriceTier<'a> {
    /// Creates a new price tier.
    pub fn new(min_quantity: NonZeroU32, price: Money<'a, Currency>) -> Self {
        Self {
            min_quantity,
            price,
        }
    }
}

/// Price tiers for a product, ordered by ascending minimum quantity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTiers<'a> {
    tiers: SmallVec<[PriceTier<'a>; 3]>,
}

impl<'a> PriceTiers<'a> {
    /// Creates a tier set, sorting by minimum quantity.
    ///
    /// When two tiers share a minimum quantity the later one wins.
    pub fn new(tiers: impl IntoIterator<Item = PriceTier<'a>>) -> Self {
        let mut sorted: SmallVec<[PriceTier<'a>; 3]> = SmallVec::new();

        for tier in tiers {
            match sorted.binary_search_by_key(&tier.min_quantity, |t| t.min_quantity) {
                Ok(idx) => {
                    if let Some(existing) = sorted.get_mut(idx) {
                        *existing = tier;
                    }
                }
                Err(idx) => sorted.insert(idx, tier),
            }
        }

        Self { tiers: sorted }
    }

    /// Returns true if there are no tiers.
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Number of tiers.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Iterate over the tiers in ascending minimum quantity order.
    pub fn iter(&self) -> impl Iterator<Item = &PriceTier<'a>> {
        self.tiers.iter()
    }

    /// Unit price for the given quantity: the tier with the greatest minimum
    /// quantity not above `quantity`, or `list_price` when no tier applies.
    pub fn unit_price_for(&self, quantity: u32, list_price: Money<'a, Currency>) -> Money<'a, Currency> {
        self.tiers
            .iter()
            .rev()
            .find(|tier| tier.min_quantity.get() <= quantity)
            .map_or(list_price, |tier| tier.price)
    }
}

/// Rounded percentage discount of `price` relative to `original`.
///
/// Rounds half up. Returns zero when `original` is not above `price`, and never
/// exceeds 100.
pub fn discount_percent(original: &Money<'_, Currency>, price: &Money<'_, Currency>) -> u32 {
    let original = original.to_minor_units();
    let price = price.to_minor_units().max(0);

    if original <= price {
        return 0;
    }

    let saved = i128::from(original - price);
    let original = i128::from(original);
    let percent = (saved * 200 + original) / (original * 2);

    u32::try_from(percent.min(100)).unwrap_or(100)
}
