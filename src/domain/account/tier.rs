//! Entitlement tier definitions.
//!
//! Represents the entitlement levels a VidForge user can hold.

use serde::{Deserialize, Serialize};

/// A user's entitlement tier.
///
/// Determines the daily processing quota, the maximum upload size, and
/// whether batch processing is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserTier {
    /// Paid tier - unlimited daily actions, larger uploads.
    Paid,

    /// VIP tier - everything, including batch processing.
    Vip,

    /// Free tier - evaluation quota, small uploads.
    ///
    /// Also the fail-safe target: any unrecognized tier label is treated
    /// as free so an unknown value never grants elevated quota.
    #[serde(other)]
    Free,
}

impl UserTier {
    /// Parses a stored tier label, falling back to `Free` for anything
    /// unrecognized.
    pub fn from_label(label: &str) -> Self {
        match label {
            "paid" => UserTier::Paid,
            "vip" => UserTier::Vip,
            _ => UserTier::Free,
        }
    }

    /// The canonical storage label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            UserTier::Free => "free",
            UserTier::Paid => "paid",
            UserTier::Vip => "vip",
        }
    }

    /// Returns true if this tier is a paying tier.
    pub fn is_paying(&self) -> bool {
        !matches!(self, UserTier::Free)
    }

    /// Human-readable name used in quota denial messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserTier::Free => "Free",
            UserTier::Paid => "Paid",
            UserTier::Vip => "VIP",
        }
    }
}

impl Default for UserTier {
    fn default() -> Self {
        UserTier::Free
    }
}

impl std::fmt::Display for UserTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
