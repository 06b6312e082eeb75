//! Tier-based entitlement limits.
//!
//! Defines the processing quota, upload ceiling, and batch permission for
//! each tier.

use super::UserTier;
use serde::{Deserialize, Serialize};

const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * MIB;

/// Entitlement limits for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLimits {
    /// The tier these limits apply to.
    pub tier: UserTier,
    /// Maximum approved actions per calendar day. None = unlimited.
    pub daily_quota: Option<u32>,
    /// Maximum size of a single uploaded file, in bytes.
    pub max_file_bytes: u64,
    /// Whether batch processing is allowed.
    pub batch_allowed: bool,
}

impl TierLimits {
    /// Get the limits for a specific tier.
    ///
    /// # Tier Configuration
    ///
    /// | Tier | Daily quota | Max file | Batch |
    /// |------|-------------|----------|-------|
    /// | Free | 3 | 50 MiB | No |
    /// | Paid | Unlimited | 500 MiB | No |
    /// | Vip | Unlimited | 2 GiB | Yes |
    pub fn for_tier(tier: UserTier) -> Self {
        match tier {
            UserTier::Free => Self {
                tier,
                daily_quota: Some(3),
                max_file_bytes: 50 * MIB,
                batch_allowed: false,
            },
            UserTier::Paid => Self {
                tier,
                daily_quota: None,
                max_file_bytes: 500 * MIB,
                batch_allowed: false,
            },
            UserTier::Vip => Self {
                tier,
                daily_quota: None,
                max_file_bytes: 2 * GIB,
                batch_allowed: true,
            },
        }
    }

    /// Check if the daily quota is exhausted at the given usage count.
    ///
    /// Returns false if unlimited or under quota.
    pub fn quota_exhausted(&self, daily_usage: u32) -> bool {
        self.daily_quota
            .map(|quota| daily_usage >= quota)
            .unwrap_or(false)
    }

    /// The upload ceiling in whole megabytes, for denial messages.
    pub fn max_file_megabytes(&self) -> u64 {
        self.max_file_bytes / MIB
    }
}

/// The entitlement policy table.
///
/// An injectable lookup from tier to limits; the default consults the
/// static table above. Swapping the lookup lets tests exercise the
/// enforcer against tightened limits.
#[derive(Clone)]
pub struct QuotaPolicy {
    limits_for: fn(UserTier) -> TierLimits,
}

impl QuotaPolicy {
    /// Policy backed by a custom lookup function.
    pub fn new(limits_for: fn(UserTier) -> TierLimits) -> Self {
        Self { limits_for }
    }

    /// The limits governing a tier under this policy.
    pub fn limits(&self, tier: UserTier) -> TierLimits {
        (self.limits_for)(tier)
    }
}

impl Default for QuotaPolicy {
    fn default() -> Self {
        Self {
            limits_for: TierLimits::for_tier,
        }
    }
}

impl std::fmt::Debug for QuotaPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuotaPolicy").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tier Configuration Tests

    #[test]
    fn free_tier_has_three_daily_actions() {
        let limits = TierLimits::for_tier(UserTier::Free);
        assert_eq!(limits.daily_quota, Some(3));
    }

    #[test]
    fn free_tier_caps_uploads_at_50_mib() {
        let limits = TierLimits::for_tier(UserTier::Free);
        assert_eq!(limits.max_file_bytes, 50 * 1024 * 1024);
        assert_eq!(limits.max_file_megabytes(), 50);
    }

    #[test]
    fn free_tier_has_no_batch() {
        assert!(!TierLimits::for_tier(UserTier::Free).batch_allowed);
    }

    #[test]
    fn paid_tier_has_unlimited_daily_actions() {
        let limits = TierLimits::for_tier(UserTier::Paid);
        assert_eq!(limits.daily_quota, None);
    }

    #[test]
    fn paid_tier_caps_uploads_at_500_mib() {
        let limits = TierLimits::for_tier(UserTier::Paid);
        assert_eq!(limits.max_file_bytes, 500 * 1024 * 1024);
    }

    #[test]
    fn paid_tier_has_no_batch() {
        assert!(!TierLimits::for_tier(UserTier::Paid).batch_allowed);
    }

    #[test]
    fn vip_tier_caps_uploads_at_2_gib() {
        let limits = TierLimits::for_tier(UserTier::Vip);
        assert_eq!(limits.max_file_bytes, 2 * 1024 * 1024 * 1024);
        assert_eq!(limits.max_file_megabytes(), 2048);
    }

    #[test]
    fn vip_tier_has_batch() {
        assert!(TierLimits::for_tier(UserTier::Vip).batch_allowed);
    }

    // Quota Check Tests

    #[test]
    fn quota_exhausted_when_at_limit() {
        let limits = TierLimits::for_tier(UserTier::Free);
        assert!(limits.quota_exhausted(3));
    }

    #[test]
    fn quota_exhausted_when_over_limit() {
        let limits = TierLimits::for_tier(UserTier::Free);
        assert!(limits.quota_exhausted(7));
    }

    #[test]
    fn quota_not_exhausted_when_under() {
        let limits = TierLimits::for_tier(UserTier::Free);
        assert!(!limits.quota_exhausted(2));
    }

    #[test]
    fn quota_never_exhausted_for_unlimited() {
        let limits = TierLimits::for_tier(UserTier::Vip);
        assert!(!limits.quota_exhausted(1_000_000));
    }

    // Policy Tests

    #[test]
    fn default_policy_uses_static_table() {
        let policy = QuotaPolicy::default();
        assert_eq!(policy.limits(UserTier::Free).daily_quota, Some(3));
        assert_eq!(policy.limits(UserTier::Vip).daily_quota, None);
    }

    #[test]
    fn custom_policy_overrides_lookup() {
        fn strict(tier: UserTier) -> TierLimits {
            TierLimits {
                tier,
                daily_quota: Some(1),
                max_file_bytes: 1024,
                batch_allowed: false,
            }
        }

        let policy = QuotaPolicy::new(strict);
        assert_eq!(policy.limits(UserTier::Vip).daily_quota, Some(1));
    }
}
