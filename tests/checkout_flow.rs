//! Integration tests for checkout: from the default starting cart through the receipt to a
//! placed order.

use std::time::Duration;

use rusty_money::{Money, iso::INR};
use testresult::TestResult;

use storefront::{
    checkout::{Checkout, CheckoutError, CheckoutSource, DeliveryOption},
    fixtures::Fixture,
    orders::{
        AddressType, OrderConfirmation, OrderError, OrderGateway, OrderId, OrderPayload,
        OrderStatus, PaymentMethod, ShippingAddress, SimulatedOrderGateway, UserId,
        gateway::MockOrderGateway,
    },
    products::ProductId,
    receipt::Receipt,
};

fn address() -> ShippingAddress {
    ShippingAddress {
        name: "John Doe".to_string(),
        address: "123 Main St, Apt 4B".to_string(),
        city: "New York".to_string(),
        kind: AddressType::Home,
    }
}

fn order(checkout: Checkout<'_>, delivery: DeliveryOption) -> OrderPayload {
    checkout.into_order(
        UserId::new("user-123"),
        address(),
        PaymentMethod::Upi,
        delivery,
    )
}

#[test]
fn checkout_totals_include_delivery() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let cart = fixture.cart()?;
    let checkout = Checkout::from_cart(&cart)?;

    assert_eq!(checkout.source(), CheckoutSource::Cart);

    let totals = checkout.totals(DeliveryOption::Express);

    assert_eq!(totals.item_count, 4);
    assert_eq!(totals.subtotal, Money::from_minor(4_499_600, INR));
    assert_eq!(totals.discount, Money::from_minor(1_050_000, INR));
    assert_eq!(totals.delivery, Money::from_minor(9_900, INR));
    assert_eq!(totals.total, Money::from_minor(3_459_500, INR));

    Ok(())
}

#[test]
fn empty_cart_cannot_check_out() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let mut cart = fixture.cart()?;

    cart.clear();

    assert_eq!(Checkout::from_cart(&cart).err(), Some(CheckoutError::EmptyCart));

    Ok(())
}

#[test]
fn buy_now_leaves_cart_untouched() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let cart = fixture.cart()?;
    let coffee = fixture.catalog().get(ProductId::new(4))?.clone();

    let checkout = Checkout::buy_now(coffee);

    assert_eq!(checkout.source(), CheckoutSource::BuyNow);
    assert_eq!(checkout.total(), Money::from_minor(899_900, INR));
    assert_eq!(checkout.savings(), Money::from_minor(300_000, INR));
    assert_eq!(cart.count(), 4);

    Ok(())
}

#[test]
fn receipt_lists_every_line() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let cart = fixture.cart()?;
    let checkout = Checkout::from_cart(&cart)?;

    let mut out = Vec::new();
    Receipt::from_checkout(&checkout, DeliveryOption::Standard).write_to(&mut out)?;

    let output = String::from_utf8(out)?;

    for product in ["Wireless Headphones Pro Max", "Smart Fitness Watch", "Premium Running Shoes"] {
        assert!(output.contains(product), "missing {product}");
    }

    assert!(output.contains("Price (4 items):"));
    assert!(output.contains("FREE"));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn simulated_gateway_confirms_order() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let mut cart = fixture.cart()?;
    let payload = order(Checkout::from_cart(&cart)?, DeliveryOption::Standard);

    assert_eq!(payload.lines.len(), 3);
    assert_eq!(payload.total, 3_449_600);

    let gateway = SimulatedOrderGateway::new(Duration::from_millis(1500));
    let confirmation = gateway.place_order(payload).await?;

    assert!(confirmation.success);
    assert!(confirmation.order_id.as_str().starts_with("ORD"));
    assert_eq!(confirmation.order_id.as_str().len(), 9);

    cart.clear();

    assert!(cart.is_empty());
    assert_eq!(OrderStatus::Confirmed.progress_percent(), 25);

    Ok(())
}

#[tokio::test]
async fn rejected_order_keeps_cart() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let cart = fixture.cart()?;
    let payload = order(Checkout::from_cart(&cart)?, DeliveryOption::Priority);

    let mut gateway = MockOrderGateway::new();

    gateway
        .expect_place_order()
        .withf(|payload| payload.delivery == DeliveryOption::Priority && payload.total == 3_469_500)
        .times(1)
        .returning(|_| Err(OrderError::Rejected("payment declined".to_string())));

    let result = gateway.place_order(payload).await;

    assert_eq!(result, Err(OrderError::Rejected("payment declined".to_string())));
    assert_eq!(cart.count(), 4);

    Ok(())
}

#[tokio::test]
async fn gateway_can_be_swapped_for_a_mock() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let cart = fixture.cart()?;
    let payload = order(Checkout::from_cart(&cart)?, DeliveryOption::Standard);

    let mut gateway = MockOrderGateway::new();

    gateway.expect_place_order().times(1).returning(|_| {
        Ok(OrderConfirmation {
            success: true,
            order_id: OrderId::generate(&mut rand::thread_rng()),
        })
    });

    let confirmation = gateway.place_order(payload).await?;

    assert!(confirmation.success);

    Ok(())
}
