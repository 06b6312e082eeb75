//! CreateOrderHandler - Command handler for placing an order.

use std::sync::Arc;

use crate::domain::billing::{BillingError, Order, PlanDuration, PlanMode};
use crate::domain::foundation::UserId;
use crate::ports::{OrderRepository, SettlementQueue};

/// Command to place an order.
///
/// Mode and duration arrive as wire labels so a bad value surfaces as a
/// field-level validation error, not a deserialization failure.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub user_id: UserId,
    pub mode: String,
    pub plan_type: String,
    pub duration: Option<String>,
    pub amount_cents: i64,
    pub payment_method: String,
}

/// Result of successful order placement.
#[derive(Debug, Clone)]
pub struct CreateOrderResult {
    pub order: Order,
}

/// Handler for order placement.
///
/// Persists a pending order and schedules its settlement, then returns
/// immediately; the caller gets the order number and a poll location
/// before payment confirmation fires. Scheduling failures are logged and
/// swallowed; nobody is waiting on settlement, and the order simply
/// stays pending.
pub struct CreateOrderHandler {
    orders: Arc<dyn OrderRepository>,
    settlement: Arc<dyn SettlementQueue>,
}

impl CreateOrderHandler {
    pub fn new(orders: Arc<dyn OrderRepository>, settlement: Arc<dyn SettlementQueue>) -> Self {
        Self { orders, settlement }
    }

    pub async fn handle(&self, cmd: CreateOrderCommand) -> Result<CreateOrderResult, BillingError> {
        if cmd.mode.is_empty() {
            return Err(BillingError::validation("mode", "cannot be empty"));
        }
        let mode = PlanMode::from_label(&cmd.mode).ok_or_else(|| {
            BillingError::validation("mode", format!("unknown plan mode '{}'", cmd.mode))
        })?;

        let duration = match cmd.duration.as_deref() {
            None => None,
            Some(label) => Some(PlanDuration::from_label(label).ok_or_else(|| {
                BillingError::validation("duration", format!("unknown duration '{}'", label))
            })?),
        };

        let order = Order::create(
            cmd.user_id,
            mode,
            cmd.plan_type,
            duration,
            cmd.amount_cents,
            cmd.payment_method,
        )?;

        self.orders.insert(&order).await?;

        if let Err(e) = self.settlement.enqueue(order.id).await {
            tracing::error!(order_id = %order.id, error = %e, "failed to schedule settlement");
        }

        Ok(CreateOrderResult { order })
    }
}
