//! Order repository port.

use crate::domain::billing::Order;
use crate::domain::foundation::{DomainError, OrderId, UserId};
use async_trait::async_trait;

/// Repository port for Order persistence.
///
/// Implementations must enforce uniqueness of the order number.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a new order.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` on an order-number collision
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, order: &Order) -> Result<(), DomainError>;

    /// Update an existing order (the pending->paid transition).
    ///
    /// # Errors
    ///
    /// - `OrderNotFound` if the order doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, order: &Order) -> Result<(), DomainError>;

    /// Find an order by its id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// All orders for a user, newest-created first.
    ///
    /// A finite snapshot, not a live stream.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn OrderRepository) {}
    }
}
