//! ListOrdersHandler - Query handler for a user's order history.

use std::sync::Arc;

use crate::domain::billing::{BillingError, Order};
use crate::domain::foundation::UserId;
use crate::ports::OrderRepository;

/// Query for a user's orders.
#[derive(Debug, Clone)]
pub struct ListOrdersQuery {
    pub user_id: UserId,
}

/// Handler returning order snapshots, newest-created first.
///
/// An order's status at read time may be either pending or paid depending
/// on whether its settlement has fired yet; this is a snapshot, not a
/// live stream.
pub struct ListOrdersHandler {
    orders: Arc<dyn OrderRepository>,
}

impl ListOrdersHandler {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    pub async fn handle(&self, query: ListOrdersQuery) -> Result<Vec<Order>, BillingError> {
        Ok(self.orders.list_by_user(&query.user_id).await?)
    }
}
