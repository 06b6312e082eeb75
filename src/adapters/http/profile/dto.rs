//! HTTP DTOs for the profile endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::account::{UserAccount, UserTier};

/// Request to update the user's own profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    /// New display name.
    pub username: String,
}

/// The user's profile with a fresh quota window.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub tier: UserTier,
    pub daily_usage: u32,
    pub total_usage: u64,
    /// The day the daily counter refers to (ISO 8601 date).
    pub last_usage_day: Option<String>,
    /// Subscription expiry (ISO 8601), if time-boxed.
    pub subscription_end: Option<String>,
    /// When the account was registered (ISO 8601).
    pub created_at: String,
}

impl From<UserAccount> for ProfileResponse {
    fn from(account: UserAccount) -> Self {
        Self {
            id: account.id.to_string(),
            username: account.username,
            email: account.email,
            tier: account.tier,
            daily_usage: account.daily_usage,
            total_usage: account.total_usage,
            last_usage_day: account.last_usage_day.map(|d| d.to_string()),
            subscription_end: account
                .subscription_end
                .map(|t| t.as_datetime().to_rfc3339()),
            created_at: account.created_at.as_datetime().to_rfc3339(),
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
    use crate::domain::foundation::{UsageDay, UserId};

    #[test]
    fn update_request_deserializes() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"username": "casey-two"}"#).unwrap();
        assert_eq!(request.username, "casey-two");
    }

    #[test]
    fn profile_response_from_account() {
        let mut account = UserAccount::register(
            UserId::new("user-1").unwrap(),
            "casey",
            "casey@example.com",
        );
        account.daily_usage = 2;
        account.total_usage = 9;
        account.last_usage_day = UsageDay::from_ymd(2024, 6, 15);

        let response = ProfileResponse::from(account);
        assert_eq!(response.username, "casey");
        assert_eq!(response.daily_usage, 2);
        assert_eq!(response.last_usage_day.as_deref(), Some("2024-06-15"));
        assert!(response.subscription_end.is_none());
    }

    #[test]
    fn profile_response_serializes_tier_lowercase() {
        let account = UserAccount::register(
            UserId::new("user-1").unwrap(),
            "casey",
            "casey@example.com",
        );
        let json = serde_json::to_string(&ProfileResponse::from(account)).unwrap();
        assert!(json.contains(r#""tier":"free""#));
    }
}
