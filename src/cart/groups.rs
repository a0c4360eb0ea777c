//! Seller groups

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::{
    cart::CartLine,
    sellers::{Seller, SellerKey},
};

/// The lines of a cart sold by one seller.
#[derive(Debug, Clone)]
pub struct SellerGroup<'c, 'a> {
    key: SellerKey,
    seller: Option<&'c Seller>,
    lines: SmallVec<[&'c CartLine<'a>; 4]>,
    currency: &'static Currency,
}

impl<'c, 'a> SellerGroup<'c, 'a> {
    /// Grouping key for this group.
    pub fn key(&self) -> SellerKey {
        self.key
    }

    /// Seller of the lines, taken from the first line in the group.
    pub fn seller(&self) -> Option<&'c Seller> {
        self.seller
    }

    /// Lines in this group, in cart order.
    pub fn lines(&self) -> &[&'c CartLine<'a>] {
        &self.lines
    }

    /// Number of lines in this group.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Groups always hold at least one line.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price × quantity` over this group.
    pub fn total(&self) -> Money<'a, Currency> {
        Money::from_minor(
            self.lines.iter().map(|line| line.subtotal_minor()).sum(),
            self.currency,
        )
    }

    /// Sum of quantities over this group.
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }
}

/// Partition lines by seller, ordered by first appearance.
///
/// Lines whose product has no seller are collected under [`SellerKey::Unknown`].
pub fn group_by_seller<'c, 'a>(
    lines: &'c [CartLine<'a>],
    currency: &'static Currency,
) -> Vec<SellerGroup<'c, 'a>> {
    let mut groups: Vec<SellerGroup<'c, 'a>> = Vec::new();
    let mut index: FxHashMap<SellerKey, usize> = FxHashMap::default();

    for line in lines {
        let seller = line.product().seller.as_ref();
        let key = SellerKey::from(seller);

        let idx = *index.entry(key).or_insert_with(|| {
            groups.push(SellerGroup {
                key,
                seller,
                lines: SmallVec::new(),
                currency,
            });

            groups.len() - 1
        });

        if let Some(group) = groups.get_mut(idx) {
            group.lines.push(line);
        }
    }

    groups
}
