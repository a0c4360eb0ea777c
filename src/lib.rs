//! Storefront
//!
//! Storefront is the cart and checkout core of a multi-seller shop: products and sellers, a
//! quantity-keyed cart with seller grouping, checkout snapshots with delivery charges, order
//! submission through a pluggable gateway, and a price-details receipt.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod fixtures;
pub mod observability;
pub mod offers;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod sellers;
pub mod wholesale;
