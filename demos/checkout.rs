//! Checkout Example
//!
//! Loads a fixture set, adjusts the starting cart, prints the price details and places the
//! order through the simulated gateway.
//!
//! Use `-f` to load a fixture set by name
//! Use `-d` to pick a delivery option and `-p` a payment method

use std::{io, io::Write, time::Instant};

use anyhow::Result;
use humanize_duration::{Truncate, prelude::DurationExt};
use tracing::info;

use storefront::{
    checkout::Checkout,
    config::StorefrontConfig,
    fixtures::Fixture,
    observability::init_logging,
    orders::{
        AddressType, OrderGateway, OrderStatus, ShippingAddress, SimulatedOrderGateway, UserId,
    },
    products::ProductId,
    receipt::Receipt,
};

/// Checkout Example
#[tokio::main]
pub async fn main() -> Result<()> {
    let config = StorefrontConfig::load()?;

    init_logging(&config.logging)?;

    let fixture = Fixture::from_set_in(&config.fixtures_dir, &config.fixture)?;
    let catalog = fixture.catalog();
    let mut cart = fixture.cart()?;

    // Switch the first product to its best-value seller and buy one more.
    if let Some(base) = catalog.iter().next()
        && let Some(offer) = catalog.offers(base.id).and_then(|offers| offers.best_value())
    {
        let product = offer.product_for(base);

        cart.remove_line(product.id);
        cart.add_or_increment(&product)?;
        cart.add_or_increment(&product)?;
    }

    cart.set_quantity(ProductId::new(3), 0);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for group in cart.group_by_seller() {
        writeln!(
            handle,
            " {}: {} items, {}",
            group
                .seller()
                .map_or_else(|| group.key().to_string(), |seller| seller.name.clone()),
            group.count(),
            group.total()
        )?;
    }

    let checkout = Checkout::from_cart(&cart)?;

    Receipt::from_checkout(&checkout, config.delivery).write_to(&mut handle)?;

    let payload = checkout.into_order(
        UserId::new("user-123"),
        ShippingAddress {
            name: "John Doe".to_string(),
            address: "123 Main St, Apt 4B".to_string(),
            city: "New York".to_string(),
            kind: AddressType::Home,
        },
        config.payment,
        config.delivery,
    );

    let gateway = SimulatedOrderGateway::new(config.order_delay());

    let start = Instant::now();
    let confirmation = gateway.place_order(payload).await?;
    let elapsed = start.elapsed();

    cart.clear();

    info!(order_id = %confirmation.order_id, "cart cleared after order");

    writeln!(
        handle,
        " {}: {} ({}% complete) in {} ({}s)",
        OrderStatus::Confirmed,
        confirmation.order_id,
        OrderStatus::Confirmed.progress_percent(),
        elapsed.human(Truncate::Nano),
        elapsed.as_secs_f32()
    )?;

    Ok(())
}
