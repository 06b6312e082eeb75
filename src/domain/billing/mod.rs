//! Billing domain: orders, plans, and entitlement resolution.

mod entitlement;
mod errors;
mod order;
mod order_number;
mod plan;

pub use entitlement::{resolve_entitlement, EntitlementChange};
pub use errors::BillingError;
pub use order::{Order, OrderStatus};
pub use order_number::OrderNumber;
pub use plan::{PlanDuration, PlanMode};
