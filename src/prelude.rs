//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine, groups::SellerGroup},
    catalog::{Catalog, CatalogError},
    checkout::{Checkout, CheckoutError, CheckoutSource, CheckoutTotals, DeliveryOption},
    fixtures::{Fixture, FixtureError},
    offers::{DeliveryEstimate, SellerOffer, SellerOffers},
    orders::{
        AddressType, OrderConfirmation, OrderError, OrderFilter, OrderGateway, OrderId, OrderLine,
        OrderPayload, OrderStatus, PaymentMethod, ShippingAddress, SimulatedOrderGateway, UserId,
    },
    products::{Product, ProductId},
    receipt::{Receipt, ReceiptError},
    sellers::{Seller, SellerId, SellerKey},
    wholesale::{PriceTier, PriceTiers, VendorType},
};
