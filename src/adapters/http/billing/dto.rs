//! HTTP DTOs for the order endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::billing::Order;

/// Request to place an order.
///
/// Mode and duration are plain strings so unknown values surface as
/// field-level validation errors with a machine-readable code.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    /// Plan mode: subscription, buyout, payperuse, or credits.
    #[serde(default)]
    pub mode: String,
    /// Storefront plan label.
    #[serde(default)]
    pub plan_type: String,
    /// Explicit billing period (monthly/yearly); classified from the plan
    /// label when absent.
    #[serde(default)]
    pub duration: Option<String>,
    /// Amount in cents.
    #[serde(default)]
    pub amount_cents: i64,
    /// Payment method chosen at checkout.
    #[serde(default)]
    pub payment_method: String,
}

/// Response for successful order placement.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order_number: String,
    /// Where the client can poll settlement progress.
    pub payment_url: String,
    pub message: String,
}

/// One order snapshot in a listing.
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub order_number: String,
    pub plan_mode: String,
    pub plan_type: String,
    pub amount_cents: i64,
    pub status: String,
    /// When the order was created (ISO 8601).
    pub created_at: String,
    /// When settlement fired (ISO 8601), if it has.
    pub paid_at: Option<String>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            order_number: order.order_number.to_string(),
            plan_mode: order.plan_mode.label().to_string(),
            plan_type: order.plan_type,
            amount_cents: order.amount_cents,
            status: order.status.label().to_string(),
            created_at: order.created_at.as_datetime().to_rfc3339(),
            paid_at: order.paid_at.map(|t| t.as_datetime().to_rfc3339()),
        }
    }
}

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error_code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::PlanMode;
    use crate::domain::foundation::{Timestamp, UserId};

    #[test]
    fn create_order_request_deserializes() {
        let json = r#"{
            "mode": "subscription",
            "plan_type": "monthly-pro",
            "amount_cents": 1999,
            "payment_method": "card"
        }"#;
        let request: CreateOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.mode, "subscription");
        assert_eq!(request.amount_cents, 1999);
        assert!(request.duration.is_none());
    }

    #[test]
    fn create_order_request_defaults_missing_fields() {
        let request: CreateOrderRequest = serde_json::from_str("{}").unwrap();
        assert!(request.mode.is_empty());
        assert_eq!(request.amount_cents, 0);
    }

    #[test]
    fn create_order_request_accepts_explicit_duration() {
        let json = r#"{
            "mode": "subscription",
            "plan_type": "pro",
            "duration": "yearly",
            "amount_cents": 19900,
            "payment_method": "card"
        }"#;
        let request: CreateOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.duration.as_deref(), Some("yearly"));
    }

    #[test]
    fn order_response_from_pending_order() {
        let order = Order::create(
            UserId::new("user-1").unwrap(),
            PlanMode::Buyout,
            "lifetime",
            None,
            9999,
            "card",
        )
        .unwrap();

        let response = OrderResponse::from(order.clone());
        assert_eq!(response.order_number, order.order_number.to_string());
        assert_eq!(response.status, "pending");
        assert!(response.paid_at.is_none());
    }

    #[test]
    fn order_response_carries_paid_at_when_settled() {
        let mut order = Order::create(
            UserId::new("user-1").unwrap(),
            PlanMode::Buyout,
            "lifetime",
            None,
            9999,
            "card",
        )
        .unwrap();
        order.settle(Timestamp::now(), "PAY1").unwrap();

        let response = OrderResponse::from(order);
        assert_eq!(response.status, "paid");
        assert!(response.paid_at.is_some());
    }
}
