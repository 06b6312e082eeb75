//! Usage-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Denied (DAILY_LIMIT_EXCEEDED) | 403 |
//! | Denied (FILE_SIZE_EXCEEDED) | 413 |
//! | Denied (VIP_REQUIRED) | 403 |
//! | UserNotFound | 404 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

use super::DenyReason;

/// Errors from the processing-action path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// The quota enforcer denied the action.
    Denied(DenyReason),

    /// The authenticated user has no account record.
    UserNotFound(UserId),

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl UsageError {
    pub fn denied(reason: DenyReason) -> Self {
        UsageError::Denied(reason)
    }

    pub fn user_not_found(user_id: UserId) -> Self {
        UsageError::UserNotFound(user_id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        UsageError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        UsageError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            UsageError::Denied(reason) => reason.code(),
            UsageError::UserNotFound(_) => ErrorCode::UserNotFound,
            UsageError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            UsageError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            UsageError::Denied(reason) => reason.message(),
            UsageError::UserNotFound(user_id) => format!("User not found: {}", user_id),
            UsageError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            UsageError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for UsageError {}

impl From<DomainError> for UsageError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::UserNotFound => UsageError::Infrastructure(err.to_string()),
            ErrorCode::ValidationFailed => UsageError::ValidationFailed {
                field: "unknown".to_string(),
                message: err.to_string(),
            },
            _ => UsageError::Infrastructure(err.to_string()),
        }
    }
}

impl From<UsageError> for DomainError {
    fn from(err: UsageError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
