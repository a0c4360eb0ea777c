//! Order gateway

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tracing::info;

use crate::orders::{OrderConfirmation, OrderId, OrderPayload};

/// Default delay before the simulated gateway responds.
pub const DEFAULT_ORDER_DELAY: Duration = Duration::from_millis(1500);

/// Errors placing an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The payload had no lines.
    #[error("order has no lines")]
    EmptyOrder,

    /// The gateway refused the order.
    #[error("order rejected: {0}")]
    Rejected(String),
}

/// Receives orders placed at checkout.
#[automock]
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit an order.
    async fn place_order(&self, payload: OrderPayload) -> Result<OrderConfirmation, OrderError>;
}

/// Gateway that accepts every non-empty order after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedOrderGateway {
    delay: Duration,
}

impl SimulatedOrderGateway {
    /// Creates a gateway that responds after `delay`.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The response delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedOrderGateway {
    fn default() -> Self {
        Self::new(DEFAULT_ORDER_DELAY)
    }
}

#[async_trait]
impl OrderGateway for SimulatedOrderGateway {
    #[tracing::instrument(
        name = "orders.gateway.place_order",
        skip(self, payload),
        fields(
            user_id = payload.user_id.as_str(),
            lines = payload.lines.len(),
            total = payload.total,
            currency = payload.currency,
            payment_method = %payload.payment_method
        ),
        err
    )]
    async fn place_order(&self, payload: OrderPayload) -> Result<OrderConfirmation, OrderError> {
        if payload.lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        tokio::time::sleep(self.delay).await;

        let order_id = OrderId::generate(&mut rand::thread_rng());

        info!(order_id = %order_id, "placed order");

        Ok(OrderConfirmation {
            success: true,
            order_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        checkout::DeliveryOption,
        orders::{AddressType, OrderLine, PaymentMethod, ShippingAddress, UserId},
        products::ProductId,
    };

    use super::*;

    fn payload(lines: Vec<OrderLine>) -> OrderPayload {
        OrderPayload {
            user_id: UserId::new("user-123"),
            address: ShippingAddress {
                name: "John Doe".to_string(),
                address: "456 Business Ave, Suite 200".to_string(),
                city: "New York".to_string(),
                kind: AddressType::Office,
            },
            lines,
            payment_method: PaymentMethod::Card,
            delivery: DeliveryOption::Standard,
            currency: "INR",
            subtotal: 7999,
            discount: 3000,
            total: 4999,
        }
    }

    fn headphones_line() -> OrderLine {
        OrderLine {
            product_id: ProductId::new(1),
            name: "Wireless Headphones Pro Max".to_string(),
            quantity: 1,
            unit_price: 4999,
            seller_id: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_gateway_accepts_order_after_delay() -> TestResult {
        let gateway = SimulatedOrderGateway::default();
        let started = tokio::time::Instant::now();

        let confirmation = gateway.place_order(payload(vec![headphones_line()])).await?;

        assert!(confirmation.success);
        assert!(confirmation.order_id.as_str().starts_with("ORD"));
        assert!(started.elapsed() >= DEFAULT_ORDER_DELAY);

        Ok(())
    }

    #[tokio::test]
    async fn simulated_gateway_rejects_empty_order() {
        let gateway = SimulatedOrderGateway::new(Duration::ZERO);

        let result = gateway.place_order(payload(Vec::new())).await;

        assert_eq!(result, Err(OrderError::EmptyOrder));
    }

    #[tokio::test]
    async fn mock_gateway_can_reject() {
        let mut gateway = MockOrderGateway::new();

        gateway
            .expect_place_order()
            .withf(|payload| payload.total == 4999)
            .times(1)
            .returning(|_| Err(OrderError::Rejected("payment declined".to_string())));

        let result = gateway.place_order(payload(vec![headphones_line()])).await;

        assert_eq!(
            result,
            Err(OrderError::Rejected("payment declined".to_string()))
        );
    }
}
