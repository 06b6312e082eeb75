//! User account aggregate.
//!
//! Carries the identity attributes the credential subsystem registered and
//! the usage ledger: the per-user counters the quota enforcer reads and the
//! order settlement mutates.
//!
//! # Design Decisions
//!
//! - **Ledger lives on the aggregate**: reconcile + record operate on one
//!   loaded account and are persisted as a single update, so the rollover
//!   and the increment can never be split across two writes.
//! - **Fail-safe tier**: unknown tier labels load as `free`.
//! - **Accounts are never destroyed** within this core's scope.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UsageDay, UserId};

use super::UserTier;

/// A VidForge user account.
///
/// # Invariants
///
/// - `total_usage` is monotonically non-decreasing and counts exactly the
///   approved actions, independent of daily resets.
/// - `daily_usage` is only meaningful relative to `last_usage_day`: a
///   stored day other than the current day means the effective daily usage
///   is 0 and must be reconciled before any enforcement decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Opaque identity from the credential subsystem.
    pub id: UserId,

    /// Display name.
    pub username: String,

    /// Contact address (informational; uniqueness enforced at the store).
    pub email: String,

    /// Current entitlement tier.
    pub tier: UserTier,

    /// Approved actions within the current quota window.
    pub daily_usage: u32,

    /// Approved actions over the account's lifetime.
    pub total_usage: u64,

    /// The day `daily_usage` refers to. Absent until the first action.
    pub last_usage_day: Option<UsageDay>,

    /// When a time-boxed subscription lapses. Absent for free accounts
    /// and perpetual (buyout) entitlements.
    pub subscription_end: Option<Timestamp>,

    /// When the account was registered.
    pub created_at: Timestamp,
}

impl UserAccount {
    /// Creates a fresh free-tier account with an empty ledger.
    pub fn register(id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            tier: UserTier::Free,
            daily_usage: 0,
            total_usage: 0,
            last_usage_day: None,
            subscription_end: None,
            created_at: Timestamp::now(),
        }
    }

    /// Rolls the quota window forward to `today` if it has moved on.
    ///
    /// Returns true if a reset occurred. Idempotent: a second call on the
    /// same day leaves the ledger untouched.
    pub fn reconcile(&mut self, today: UsageDay) -> bool {
        if self.last_usage_day == Some(today) {
            return false;
        }
        self.daily_usage = 0;
        self.last_usage_day = Some(today);
        true
    }

    /// Records one approved action against the ledger.
    ///
    /// Must be called after [`reconcile`](Self::reconcile) and only once
    /// the enforcer has approved the action. Returns the new
    /// (daily, total) counters.
    pub fn record_action(&mut self, today: UsageDay) -> (u32, u64) {
        self.daily_usage += 1;
        self.total_usage += 1;
        self.last_usage_day = Some(today);
        (self.daily_usage, self.total_usage)
    }

    /// The daily usage as of `today`, without mutating the ledger.
    pub fn effective_daily_usage(&self, today: UsageDay) -> u32 {
        if self.last_usage_day == Some(today) {
            self.daily_usage
        } else {
            0
        }
    }

    /// Applies a settled order's entitlement change.
    ///
    /// `new_expiry = None` leaves the current subscription end untouched
    /// (buyout and pay-per-use plans do not time-box the entitlement).
    pub fn apply_entitlement(&mut self, tier: UserTier, new_expiry: Option<Timestamp>) {
        self.tier = tier;
        if let Some(expiry) = new_expiry {
            self.subscription_end = Some(expiry);
        }
    }
}
