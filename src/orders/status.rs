//! Order status tracking

use std::fmt;

/// Stage of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderStatus {
    /// Accepted by the seller
    Confirmed,

    /// Packed for shipping
    Packed,

    /// Handed to the courier
    Shipped,

    /// Received by the customer
    Delivered,
}

impl OrderStatus {
    /// All stages in order.
    pub const STAGES: [OrderStatus; 4] = [
        Self::Confirmed,
        Self::Packed,
        Self::Shipped,
        Self::Delivered,
    ];

    /// Progress through the stages as a percentage; a confirmed order is at 25.
    pub fn progress_percent(self) -> u8 {
        match self {
            Self::Confirmed => 25,
            Self::Packed => 50,
            Self::Shipped => 75,
            Self::Delivered => 100,
        }
    }

    /// Orders are active until delivered.
    pub fn is_active(self) -> bool {
        self != Self::Delivered
    }

    /// The next stage. Delivered orders stay delivered.
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            Self::Confirmed => Self::Packed,
            Self::Packed => Self::Shipped,
            Self::Shipped | Self::Delivered => Self::Delivered,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Confirmed => "Order Confirmed",
            Self::Packed => "Packed",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
        })
    }
}

/// Filter for order listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderFilter {
    /// Every order
    #[default]
    All,

    /// Orders not yet delivered
    Active,

    /// Delivered orders
    Delivered,
}

impl OrderFilter {
    /// Whether an order in `status` is shown under this filter.
    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status.is_active(),
            Self::Delivered => !status.is_active(),
        }
    }
}
