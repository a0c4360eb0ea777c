//! Sellers

use std::fmt;

use serde::Deserialize;

/// Seller identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct SellerId(u32);

impl SellerId {
    /// Creates a new seller identifier.
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

impl From<u32> for SellerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seller {
    /// Seller identifier
    pub id: SellerId,

    /// Seller display name
    pub name: String,
}

impl Seller {
    /// Creates a new seller.
    pub fn new(id: impl Into<SellerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Grouping key for cart lines: a known seller, or the bucket for products without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SellerKey {
    /// Lines sold by the given seller
    Known(SellerId),

    /// Lines whose product has no seller
    Unknown,
}

impl From<Option<&Seller>> for SellerKey {
    fn from(seller: Option<&Seller>) -> Self {
        seller.map_or(Self::Unknown, |seller| Self::Known(seller.id))
    }
}

impl fmt::Display for SellerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(id) => write!(f, "seller {id}"),
            Self::Unknown => f.write_str("unknown seller"),
        }
    }
}
