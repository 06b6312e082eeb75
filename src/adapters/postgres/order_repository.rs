//! PostgreSQL implementation of OrderRepository.

use crate::domain::billing::{Order, OrderNumber, OrderStatus, PlanDuration, PlanMode};
use crate::domain::foundation::{DomainError, ErrorCode, OrderId, Timestamp, UserId};
use crate::ports::OrderRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::user_repository::parse_user_id_as_uuid;

/// PostgreSQL implementation of the OrderRepository port.
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Creates a new PostgresOrderRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an order.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    user_id: Uuid,
    order_number: String,
    plan_mode: String,
    plan_type: String,
    duration: Option<String>,
    amount_cents: i64,
    payment_method: String,
    status: String,
    created_at: DateTime<Utc>,
    paid_at: Option<DateTime<Utc>>,
    payment_reference: Option<String>,
}

impl TryFrom<OrderRow> for Order {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let plan_mode = PlanMode::from_label(&row.plan_mode).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid plan mode value: {}", row.plan_mode),
            )
        })?;
        let status = OrderStatus::from_label(&row.status).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid order status value: {}", row.status),
            )
        })?;
        let duration = row
            .duration
            .as_deref()
            .map(|label| {
                PlanDuration::from_label(label).ok_or_else(|| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Invalid duration value: {}", label),
                    )
                })
            })
            .transpose()?;

        Ok(Order {
            id: OrderId::from_uuid(row.id),
            user_id: UserId::new(row.user_id.to_string()).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid user id: {}", e))
            })?,
            order_number: OrderNumber::new(row.order_number).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid order number: {}", e))
            })?,
            plan_mode,
            plan_type: row.plan_type,
            duration,
            amount_cents: row.amount_cents,
            payment_method: row.payment_method,
            status,
            created_at: Timestamp::from_datetime(row.created_at),
            paid_at: row.paid_at.map(Timestamp::from_datetime),
            payment_reference: row.payment_reference,
        })
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn insert(&self, order: &Order) -> Result<(), DomainError> {
        let user_uuid = parse_user_id_as_uuid(&order.user_id)?;

        sqlx::query(
            r#"
            INSERT INTO orders (
                id, user_id, order_number, plan_mode, plan_type, duration,
                amount_cents, payment_method, status, created_at, paid_at,
                payment_reference
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(order.id.as_uuid())
        .bind(user_uuid)
        .bind(order.order_number.as_str())
        .bind(order.plan_mode.label())
        .bind(&order.plan_type)
        .bind(order.duration.map(|d| d.label()))
        .bind(order.amount_cents)
        .bind(&order.payment_method)
        .bind(order.status.label())
        .bind(order.created_at.as_datetime())
        .bind(order.paid_at.map(|t| *t.as_datetime()))
        .bind(&order.payment_reference)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("orders_order_number_key") {
                    return DomainError::new(
                        ErrorCode::ValidationFailed,
                        "Order number already exists",
                    );
                }
            }
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to insert order: {}", e))
        })?;

        Ok(())
    }

    async fn update(&self, order: &Order) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE orders SET
                status = $2,
                paid_at = $3,
                payment_reference = $4
            WHERE id = $1
            "#,
        )
        .bind(order.id.as_uuid())
        .bind(order.status.label())
        .bind(order.paid_at.map(|t| *t.as_datetime()))
        .bind(&order.payment_reference)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to update order: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::OrderNotFound, "Order not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let row: Option<OrderRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, order_number, plan_mode, plan_type, duration,
                   amount_cents, payment_method, status, created_at, paid_at,
                   payment_reference
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to fetch order: {}", e))
        })?;

        row.map(Order::try_from).transpose()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, DomainError> {
        let user_uuid = parse_user_id_as_uuid(user_id)?;

        let rows: Vec<OrderRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, order_number, plan_mode, plan_type, duration,
                   amount_cents, payment_method, status, created_at, paid_at,
                   payment_reference
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_uuid)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list orders: {}", e))
        })?;

        rows.into_iter().map(Order::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> OrderRow {
        OrderRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            order_number: "ORDER1705276800000abcdef012345".to_string(),
            plan_mode: "subscription".to_string(),
            plan_type: "monthly-pro".to_string(),
            duration: Some("monthly".to_string()),
            amount_cents: 1999,
            payment_method: "card".to_string(),
            status: "pending".to_string(),
            created_at: Utc::now(),
            paid_at: None,
            payment_reference: None,
        }
    }

    #[test]
    fn row_maps_to_order() {
        let order = Order::try_from(row()).unwrap();
        assert_eq!(order.plan_mode, PlanMode::Subscription);
        assert_eq!(order.duration, Some(PlanDuration::Monthly));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.amount_cents, 1999);
    }

    #[test]
    fn row_without_duration_maps_to_none() {
        let mut r = row();
        r.duration = None;
        let order = Order::try_from(r).unwrap();
        assert_eq!(order.duration, None);
    }

    #[test]
    fn invalid_plan_mode_fails_the_read() {
        let mut r = row();
        r.plan_mode = "trial".to_string();
        assert!(Order::try_from(r).is_err());
    }

    #[test]
    fn invalid_status_fails_the_read() {
        let mut r = row();
        r.status = "cancelled".to_string();
        assert!(Order::try_from(r).is_err());
    }

    #[test]
    fn invalid_duration_fails_the_read() {
        let mut r = row();
        r.duration = Some("weekly".to_string());
        assert!(Order::try_from(r).is_err());
    }
}
