//! Integration tests for the default fixture set: the catalog, the starting cart and seller
//! selection.
//!
//! Starting cart:
//!
//! - Wireless Headphones Pro Max x1 (TechStore Pro): ₹4,999 (MRP ₹7,999)
//! - Smart Fitness Watch x2 (Gadget World): ₹12,999 (MRP ₹15,999)
//! - Premium Running Shoes x1 (TechStore Pro): ₹3,499 (MRP ₹4,999)
//!
//! Total ₹34,496, original total ₹44,996, savings ₹10,500 over 4 units.

use rusty_money::{Money, iso::INR};
use testresult::TestResult;

use storefront::{
    fixtures::Fixture,
    products::ProductId,
    sellers::{SellerId, SellerKey},
    wholesale::VendorType,
};

#[test]
fn starting_cart_totals() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let cart = fixture.cart()?;

    assert_eq!(cart.len(), 3);
    assert_eq!(cart.count(), 4);
    assert_eq!(cart.total(), Money::from_minor(3_449_600, INR));
    assert_eq!(cart.original_total(), Money::from_minor(4_499_600, INR));
    assert_eq!(cart.savings(), Money::from_minor(1_050_000, INR));

    Ok(())
}

#[test]
fn starting_cart_groups_by_seller() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let cart = fixture.cart()?;
    let groups = cart.group_by_seller();

    let keys: Vec<SellerKey> = groups.iter().map(|group| group.key()).collect();

    assert_eq!(
        keys,
        vec![
            SellerKey::Known(SellerId::new(1)),
            SellerKey::Known(SellerId::new(2)),
        ]
    );

    let tech_store = groups.first().ok_or("expected TechStore Pro group")?;

    assert_eq!(tech_store.len(), 2);
    assert_eq!(tech_store.count(), 2);
    assert_eq!(tech_store.total(), Money::from_minor(849_800, INR));

    let total: i64 = groups.iter().map(|group| group.total().to_minor_units()).sum();

    assert_eq!(total, cart.total().to_minor_units());

    Ok(())
}

#[test]
fn unsold_product_has_no_seller() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let mut cart = fixture.cart()?;
    let coffee = fixture.catalog().get(ProductId::new(4))?;

    assert_eq!(cart.add_or_increment(coffee)?, 1);

    let groups = cart.group_by_seller();
    let last = groups.last().ok_or("expected a group")?;

    assert_eq!(last.key(), SellerKey::Unknown);
    assert!(last.seller().is_none());
    assert_eq!(cart.count(), 5);

    Ok(())
}

#[test]
fn choosing_a_seller_reprices_the_line() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let catalog = fixture.catalog();
    let mut cart = fixture.cart()?;

    let headphones = catalog.get(ProductId::new(1))?;
    let offers = catalog.offers(headphones.id).ok_or("expected offers")?;

    assert_eq!(offers.len(), 3);

    let best = offers.best_value().ok_or("expected a best offer")?;

    assert_eq!(best.seller.name, "TechStore Pro");
    assert_eq!(best.delivery.to_string(), "2-3 days");

    let gadget_world = offers
        .iter()
        .find(|offer| offer.seller.id == SellerId::new(2))
        .ok_or("expected Gadget World offer")?;

    cart.remove_line(headphones.id);
    cart.add_or_increment(&gadget_world.product_for(headphones))?;

    let line = cart.line(headphones.id).ok_or("expected headphones line")?;

    assert_eq!(line.product().price, Money::from_minor(519_900, INR));
    assert_eq!(cart.total(), Money::from_minor(3_469_600, INR));

    Ok(())
}

#[test]
fn wholesale_tiers_price_bulk_quantities() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let watch = fixture.catalog().get(ProductId::new(2))?;

    assert_eq!(watch.unit_price_for(1), Money::from_minor(1_299_900, INR));
    assert_eq!(watch.unit_price_for(5), Money::from_minor(1_249_900, INR));
    assert_eq!(watch.unit_price_for(25), Money::from_minor(1_199_900, INR));

    Ok(())
}

#[test]
fn wholesale_listings_exclude_retail_only_products() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let catalog = fixture.catalog();

    let ids: Vec<u32> = catalog.wholesale().map(|product| product.id.get()).collect();

    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(catalog.get(ProductId::new(2))?.vendor_type, VendorType::Wholesale);
    assert_eq!(catalog.get(ProductId::new(4))?.vendor_type, VendorType::Retail);

    Ok(())
}
