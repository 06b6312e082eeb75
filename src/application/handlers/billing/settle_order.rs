//! SettleOrderHandler - Command handler for deferred payment settlement.

use std::sync::Arc;

use crate::domain::billing::{resolve_entitlement, BillingError, Order};
use crate::domain::foundation::{OrderId, Timestamp};
use crate::ports::{OrderRepository, UserRepository};

/// Command to settle a pending order.
#[derive(Debug, Clone)]
pub struct SettleOrderCommand {
    pub order_id: OrderId,
}

/// What settlement did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettleOutcome {
    /// Order was settled and the entitlement applied.
    Settled,
    /// Order was already paid; nothing changed.
    AlreadySettled,
}

/// Result of a settlement attempt.
#[derive(Debug, Clone)]
pub struct SettleOrderResult {
    pub order: Order,
    pub outcome: SettleOutcome,
}

/// Handler that confirms payment and applies the entitlement.
///
/// Runs out of band, after the order-creation response has been sent. The
/// status guard makes it idempotent: a duplicate settlement for an
/// already-paid order is a no-op, so a double-scheduled task can never
/// double-apply a tier mutation. Order first, then user: if the user
/// write fails the order is already paid and a retry will take the
/// AlreadySettled path rather than re-settle.
pub struct SettleOrderHandler {
    orders: Arc<dyn OrderRepository>,
    users: Arc<dyn UserRepository>,
}

impl SettleOrderHandler {
    pub fn new(orders: Arc<dyn OrderRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { orders, users }
    }

    pub async fn handle(&self, cmd: SettleOrderCommand) -> Result<SettleOrderResult, BillingError> {
        let mut order = self
            .orders
            .find_by_id(&cmd.order_id)
            .await?
            .ok_or(BillingError::OrderNotFound(cmd.order_id))?;

        if order.is_settled() {
            tracing::info!(order_id = %order.id, "settlement skipped, order already paid");
            return Ok(SettleOrderResult {
                order,
                outcome: SettleOutcome::AlreadySettled,
            });
        }

        let settled_at = Timestamp::now();
        order.settle(settled_at, format!("PAY{}", settled_at.epoch_millis()))?;
        self.orders.update(&order).await?;

        let change = resolve_entitlement(order.plan_mode, order.duration, settled_at);

        let mut account = self
            .users
            .find_by_id(&order.user_id)
            .await?
            .ok_or_else(|| BillingError::user_not_found(order.user_id.clone()))?;
        account.apply_entitlement(change.tier, change.new_expiry);
        self.users.update(&account).await?;

        tracing::info!(
            order_id = %order.id,
            order_number = %order.order_number,
            tier = %change.tier,
            "order settled"
        );

        Ok(SettleOrderResult {
            order,
            outcome: SettleOutcome::Settled,
        })
    }
}
