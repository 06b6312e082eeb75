//! Entitlement resolution for settled orders.
//!
//! Pure mapping from a settled order's plan to the entitlement change it
//! grants. The settlement handler applies the result to the user record.

use crate::domain::account::UserTier;
use crate::domain::foundation::Timestamp;

use super::{PlanDuration, PlanMode};

/// The entitlement change a settled order grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitlementChange {
    /// The tier the user moves to.
    pub tier: UserTier,
    /// New subscription expiry; None leaves the current expiry untouched.
    pub new_expiry: Option<Timestamp>,
}

/// Resolves the entitlement change for a settled order.
///
/// - subscription: paid tier, expiry extended one calendar month or one
///   year from `settled_at` depending on the billing period; a plan with
///   no recognized period changes the tier without touching the expiry
/// - buyout: VIP tier, perpetual (no expiry)
/// - payperuse, credits: paid tier, no expiry change
pub fn resolve_entitlement(
    mode: PlanMode,
    duration: Option<PlanDuration>,
    settled_at: Timestamp,
) -> EntitlementChange {
    match mode {
        PlanMode::Subscription => EntitlementChange {
            tier: UserTier::Paid,
            new_expiry: match duration {
                Some(PlanDuration::Monthly) => Some(settled_at.add_months(1)),
                Some(PlanDuration::Yearly) => Some(settled_at.add_years(1)),
                None => None,
            },
        },
        PlanMode::Buyout => EntitlementChange {
            tier: UserTier::Vip,
            new_expiry: None,
        },
        PlanMode::PayPerUse | PlanMode::Credits => EntitlementChange {
            tier: UserTier::Paid,
            new_expiry: None,
        },
    }
}
