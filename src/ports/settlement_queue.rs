//! Settlement queue port.
//!
//! Order settlement runs out of band: the request that created the order
//! has already been answered by the time payment confirmation fires. This
//! port is the explicit task abstraction standing in for what would be an
//! uncontrolled deferred callback: implementations own the delay, the
//! retry policy, and the ability to be drained on shutdown.

use crate::domain::foundation::{DomainError, OrderId};
use async_trait::async_trait;

/// Schedules deferred settlement for a pending order.
#[async_trait]
pub trait SettlementQueue: Send + Sync {
    /// Enqueue an order for settlement after the configured delay.
    ///
    /// Returns as soon as the work is scheduled; settlement itself is not
    /// awaited here. Once scheduled, the work is not cancellable.
    async fn enqueue(&self, order_id: OrderId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settlement_queue_is_object_safe() {
        fn _accepts_dyn(_queue: &dyn SettlementQueue) {}
    }
}
