//! Quota enforcement for processing actions.
//!
//! The enforcer turns (ledger state, policy, requested action) into an
//! allow/deny [`Decision`]. It reconciles the quota window first, then
//! evaluates the checks strictly in order; the first failing check wins.
//! That ordering is a contract: a free user over quota is told about the
//! daily limit even if the upload is also oversized.
//!
//! Approval performs no counter mutation. The caller records the action
//! and appends the audit log entry, which keeps the decision itself
//! testable in isolation.

use serde::{Deserialize, Serialize};

use crate::domain::account::{QuotaPolicy, UserAccount};
use crate::domain::foundation::{ErrorCode, UsageDay};

/// Kind of processing action requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Process a single video.
    Single,
    /// Process a set of videos in one request.
    Batch,
}

impl ActionKind {
    /// Parses the wire label, defaulting to single for anything else.
    pub fn from_label(label: &str) -> Self {
        match label {
            "batch" => ActionKind::Batch,
            _ => ActionKind::Single,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Single => "single",
            ActionKind::Batch => "batch",
        }
    }
}

/// A requested processing action, as seen by the enforcer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    /// What kind of processing is requested.
    pub kind: ActionKind,
    /// Size of the upload, when the client declared one.
    pub file_bytes: Option<u64>,
}

impl ActionRequest {
    pub fn single(file_bytes: Option<u64>) -> Self {
        Self {
            kind: ActionKind::Single,
            file_bytes,
        }
    }

    pub fn batch(file_bytes: Option<u64>) -> Self {
        Self {
            kind: ActionKind::Batch,
            file_bytes,
        }
    }
}

/// Why an action was denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    /// Free-tier daily quota is used up.
    DailyLimitExceeded { quota: u32 },
    /// Upload exceeds the tier's size ceiling.
    FileSizeExceeded { limit_megabytes: u64, tier_name: &'static str },
    /// Batch processing requires the VIP tier.
    VipRequired,
}

impl DenyReason {
    /// Machine-readable code for the API error body.
    pub fn code(&self) -> ErrorCode {
        match self {
            DenyReason::DailyLimitExceeded { .. } => ErrorCode::DailyLimitExceeded,
            DenyReason::FileSizeExceeded { .. } => ErrorCode::FileSizeExceeded,
            DenyReason::VipRequired => ErrorCode::VipRequired,
        }
    }

    /// Human-readable denial message.
    pub fn message(&self) -> String {
        match self {
            DenyReason::DailyLimitExceeded { quota } => format!(
                "Free accounts are limited to {} actions per day; upgrade for unlimited processing",
                quota
            ),
            DenyReason::FileSizeExceeded {
                limit_megabytes,
                tier_name,
            } => format!(
                "File size exceeds the {} tier limit of {} MB",
                tier_name, limit_megabytes
            ),
            DenyReason::VipRequired => {
                "Batch processing is available to VIP accounts only".to_string()
            }
        }
    }
}

/// Remaining daily quota meaning "unlimited".
pub const UNLIMITED: i64 = -1;

/// The enforcer's verdict on a requested action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Whether the action may proceed.
    pub allowed: bool,
    /// Denial reason; None when allowed.
    pub reason: Option<DenyReason>,
    /// Post-action remaining daily quota: -1 for unlimited tiers, else a
    /// non-negative count (free tier only).
    pub remaining_daily: i64,
}

impl Decision {
    fn allow(remaining_daily: i64) -> Self {
        Self {
            allowed: true,
            reason: None,
            remaining_daily,
        }
    }

    fn deny(reason: DenyReason, remaining_daily: i64) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
            remaining_daily,
        }
    }
}

/// Decides whether a processing action is within the user's entitlement.
#[derive(Debug, Clone, Default)]
pub struct QuotaEnforcer {
    policy: QuotaPolicy,
}

impl QuotaEnforcer {
    /// Enforcer over a specific policy table.
    pub fn new(policy: QuotaPolicy) -> Self {
        Self { policy }
    }

    /// Evaluates an action against the account's ledger and tier limits.
    ///
    /// Reconciles the quota window in place first (idempotent), then
    /// checks in contract order:
    /// 1. daily quota, 2. file size, 3. batch permission.
    ///
    /// The caller is responsible for persisting the reconciled account
    /// and, on approval, calling `record_action` and appending the audit
    /// log entry.
    pub fn authorize(
        &self,
        account: &mut UserAccount,
        request: &ActionRequest,
        today: UsageDay,
    ) -> Decision {
        account.reconcile(today);
        let limits = self.policy.limits(account.tier);

        if let Some(quota) = limits.daily_quota {
            if account.daily_usage >= quota {
                return Decision::deny(DenyReason::DailyLimitExceeded { quota }, 0);
            }
        }

        if let Some(size) = request.file_bytes {
            if size > limits.max_file_bytes {
                return Decision::deny(
                    DenyReason::FileSizeExceeded {
                        limit_megabytes: limits.max_file_megabytes(),
                        tier_name: limits.tier.display_name(),
                    },
                    self.remaining_after_action(&limits, account.daily_usage),
                );
            }
        }

        if request.kind == ActionKind::Batch && !limits.batch_allowed {
            return Decision::deny(
                DenyReason::VipRequired,
                self.remaining_after_action(&limits, account.daily_usage),
            );
        }

        Decision::allow(self.remaining_after_action(&limits, account.daily_usage + 1))
    }

    fn remaining_after_action(
        &self,
        limits: &crate::domain::account::TierLimits,
        used: u32,
    ) -> i64 {
        match limits.daily_quota {
            Some(quota) => i64::from(quota.saturating_sub(used)),
            None => UNLIMITED,
        }
    }
}
