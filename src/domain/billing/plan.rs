//! Purchase plan vocabulary.

use serde::{Deserialize, Serialize};

/// How a purchase changes the account's entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanMode {
    /// Time-boxed subscription; grants the paid tier until expiry.
    Subscription,
    /// One-time perpetual purchase; grants the VIP tier.
    Buyout,
    /// Pay-per-use top-up; grants the paid tier, no expiry change.
    #[serde(rename = "payperuse")]
    PayPerUse,
    /// Credit pack; grants the paid tier, no expiry change.
    Credits,
}

impl PlanMode {
    /// Parses the wire label. Unknown modes are a validation error at the
    /// order edge, never a silent default.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "subscription" => Some(PlanMode::Subscription),
            "buyout" => Some(PlanMode::Buyout),
            "payperuse" => Some(PlanMode::PayPerUse),
            "credits" => Some(PlanMode::Credits),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanMode::Subscription => "subscription",
            PlanMode::Buyout => "buyout",
            PlanMode::PayPerUse => "payperuse",
            PlanMode::Credits => "credits",
        }
    }
}

impl std::fmt::Display for PlanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Billing period of a subscription plan.
///
/// Stored explicitly on the order; the free-text plan label is only a
/// fallback classification source at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanDuration {
    Monthly,
    Yearly,
}

impl PlanDuration {
    /// Classifies a free-text plan label by keyword.
    ///
    /// Recognizes the English keywords and the CJK labels the storefront
    /// historically sent. Unrecognized labels classify as None, which
    /// means a settling subscription extends no expiry.
    pub fn classify(plan_type: &str) -> Option<Self> {
        let lower = plan_type.to_lowercase();
        if lower.contains("monthly") || plan_type.contains("月度") {
            Some(PlanDuration::Monthly)
        } else if lower.contains("yearly") || plan_type.contains("年度") {
            Some(PlanDuration::Yearly)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanDuration::Monthly => "monthly",
            PlanDuration::Yearly => "yearly",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "monthly" => Some(PlanDuration::Monthly),
            "yearly" => Some(PlanDuration::Yearly),
            _ => None,
        }
    }
}
