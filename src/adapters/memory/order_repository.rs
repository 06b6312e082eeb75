//! In-memory implementation of OrderRepository.

use crate::domain::billing::Order;
use crate::domain::foundation::{DomainError, ErrorCode, OrderId, UserId};
use crate::ports::OrderRepository;
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory order store over a mutex-guarded vector.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert(&self, order: &Order) -> Result<(), DomainError> {
        let mut orders = self.orders.lock().unwrap();
        if orders
            .iter()
            .any(|o| o.order_number == order.order_number)
        {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                "Order number already exists",
            ));
        }
        orders.push(order.clone());
        Ok(())
    }

    async fn update(&self, order: &Order) -> Result<(), DomainError> {
        let mut orders = self.orders.lock().unwrap();
        match orders.iter().position(|o| o.id == order.id) {
            Some(pos) => {
                orders[pos] = order.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::OrderNotFound, "Order not found")),
        }
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| &o.id == id)
            .cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, DomainError> {
        let mut orders: Vec<Order> = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| &o.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }
}
