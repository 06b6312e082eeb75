//! Order aggregate entity.
//!
//! An Order records one purchase attempt and its settlement. The lifecycle
//! is deliberately minimal: `pending -> paid`, terminal, with no failure or
//! cancellation states. Settlement that never fires leaves the order
//! pending.
//!
//! # Design Decisions
//!
//! - **Money in cents**: amounts are i64 cents, never floats
//! - **Single mutation**: the only state change after creation is the
//!   pending->paid transition; orders are never deleted
//! - **Explicit duration**: the billing period is an enum resolved at
//!   creation, not re-derived from the plan label at settlement time

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrderId, Timestamp, UserId};

use super::{BillingError, OrderNumber, PlanDuration, PlanMode};

/// Settlement state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Created, awaiting settlement.
    Pending,
    /// Settled. Terminal.
    Paid,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "pending" => Some(OrderStatus::Pending),
            "paid" => Some(OrderStatus::Paid),
            _ => None,
        }
    }
}

/// Order aggregate - one purchase and its settlement.
///
/// # Invariants
///
/// - `order_number` is unique (constraint at the store)
/// - `paid_at` and `payment_reference` are set exactly when status is Paid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier for this order.
    pub id: OrderId,

    /// User who placed the order.
    pub user_id: UserId,

    /// Human-facing order number.
    pub order_number: OrderNumber,

    /// How this purchase changes the entitlement.
    pub plan_mode: PlanMode,

    /// Storefront plan label, free text.
    pub plan_type: String,

    /// Billing period, when the plan is time-boxed.
    pub duration: Option<PlanDuration>,

    /// Amount in cents.
    pub amount_cents: i64,

    /// Payment method chosen at checkout.
    pub payment_method: String,

    /// Settlement state.
    pub status: OrderStatus,

    /// When the order was created.
    pub created_at: Timestamp,

    /// When settlement fired. Set only when paid.
    pub paid_at: Option<Timestamp>,

    /// Reference assigned by the (simulated) payment processor.
    pub payment_reference: Option<String>,
}

impl Order {
    /// Creates a pending order.
    ///
    /// Validates that the plan label, amount, and payment method are
    /// present and non-zero. The billing period is taken from the explicit
    /// `duration` when given, otherwise classified once from a keyword in
    /// the plan label.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` naming the offending field.
    pub fn create(
        user_id: UserId,
        plan_mode: PlanMode,
        plan_type: impl Into<String>,
        duration: Option<PlanDuration>,
        amount_cents: i64,
        payment_method: impl Into<String>,
    ) -> Result<Self, BillingError> {
        let plan_type = plan_type.into();
        let payment_method = payment_method.into();

        if plan_type.is_empty() {
            return Err(BillingError::validation("plan_type", "cannot be empty"));
        }
        if payment_method.is_empty() {
            return Err(BillingError::validation("payment_method", "cannot be empty"));
        }
        if amount_cents <= 0 {
            return Err(BillingError::validation(
                "amount_cents",
                format!("must be positive, got {}", amount_cents),
            ));
        }

        let created_at = Timestamp::now();
        let duration = duration.or_else(|| PlanDuration::classify(&plan_type));

        Ok(Self {
            id: OrderId::new(),
            user_id,
            order_number: OrderNumber::generate(created_at),
            plan_mode,
            plan_type,
            duration,
            amount_cents,
            payment_method,
            status: OrderStatus::Pending,
            created_at,
            paid_at: None,
            payment_reference: None,
        })
    }

    /// Whether settlement has already fired.
    pub fn is_settled(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    /// Marks the order paid.
    ///
    /// The single pending->paid transition. Settling an already-paid order
    /// is an error; callers wanting idempotent settlement check
    /// [`is_settled`](Self::is_settled) first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the order is not pending.
    pub fn settle(
        &mut self,
        paid_at: Timestamp,
        payment_reference: impl Into<String>,
    ) -> Result<(), BillingError> {
        if self.status != OrderStatus::Pending {
            return Err(BillingError::invalid_state(self.status.label(), "settle"));
        }
        self.status = OrderStatus::Paid;
        self.paid_at = Some(paid_at);
        self.payment_reference = Some(payment_reference.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    fn pending_order() -> Order {
        Order::create(
            test_user_id(),
            PlanMode::Subscription,
            "monthly-pro",
            None,
            1999,
            "card",
        )
        .unwrap()
    }

    // Creation tests

    #[test]
    fn create_starts_pending() {
        let order = pending_order();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.paid_at.is_none());
        assert!(order.payment_reference.is_none());
    }

    #[test]
    fn create_generates_order_number() {
        let order = pending_order();
        assert!(order.order_number.as_str().starts_with("ORDER"));
    }

    #[test]
    fn create_classifies_duration_from_plan_label() {
        let order = pending_order();
        assert_eq!(order.duration, Some(PlanDuration::Monthly));
    }

    #[test]
    fn explicit_duration_wins_over_label_keyword() {
        let order = Order::create(
            test_user_id(),
            PlanMode::Subscription,
            "monthly-pro",
            Some(PlanDuration::Yearly),
            9999,
            "card",
        )
        .unwrap();
        assert_eq!(order.duration, Some(PlanDuration::Yearly));
    }

    #[test]
    fn unrecognized_plan_label_has_no_duration() {
        let order = Order::create(
            test_user_id(),
            PlanMode::Subscription,
            "pro-plan",
            None,
            9999,
            "card",
        )
        .unwrap();
        assert_eq!(order.duration, None);
    }

    #[test]
    fn create_rejects_empty_plan_type() {
        let result = Order::create(test_user_id(), PlanMode::Buyout, "", None, 1999, "card");
        assert!(matches!(
            result,
            Err(BillingError::ValidationFailed { ref field, .. }) if field == "plan_type"
        ));
    }

    #[test]
    fn create_rejects_empty_payment_method() {
        let result = Order::create(
            test_user_id(),
            PlanMode::Buyout,
            "lifetime",
            None,
            1999,
            "",
        );
        assert!(matches!(
            result,
            Err(BillingError::ValidationFailed { ref field, .. }) if field == "payment_method"
        ));
    }

    #[test]
    fn create_rejects_zero_amount() {
        let result = Order::create(
            test_user_id(),
            PlanMode::Buyout,
            "lifetime",
            None,
            0,
            "card",
        );
        assert!(matches!(
            result,
            Err(BillingError::ValidationFailed { ref field, .. }) if field == "amount_cents"
        ));
    }

    #[test]
    fn create_rejects_negative_amount() {
        let result = Order::create(
            test_user_id(),
            PlanMode::Buyout,
            "lifetime",
            None,
            -500,
            "card",
        );
        assert!(result.is_err());
    }

    // Settlement tests

    #[test]
    fn settle_marks_paid_with_reference() {
        let mut order = pending_order();
        let paid_at = Timestamp::now();

        order.settle(paid_at, "PAY1705276800000").unwrap();

        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.paid_at, Some(paid_at));
        assert_eq!(
            order.payment_reference,
            Some("PAY1705276800000".to_string())
        );
        assert!(order.is_settled());
    }

    #[test]
    fn settle_twice_is_rejected() {
        let mut order = pending_order();
        order.settle(Timestamp::now(), "PAY1").unwrap();

        let result = order.settle(Timestamp::now(), "PAY2");

        assert!(matches!(result, Err(BillingError::InvalidState { .. })));
        assert_eq!(order.payment_reference, Some("PAY1".to_string()));
    }

    // Status tests

    #[test]
    fn status_labels_roundtrip() {
        for status in [OrderStatus::Pending, OrderStatus::Paid] {
            assert_eq!(OrderStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(OrderStatus::from_label("cancelled"), None);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }
}
