//! Authentication context shared between middleware and handlers.
//!
//! The credential subsystem itself is external; this module only models
//! the resolved identity a verified bearer credential carries.

use thiserror::Error;

use super::UserId;

/// Identity extracted from a verified bearer credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The subject identifier embedded in the credential.
    pub user_id: UserId,
}

impl AuthenticatedUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// Errors from bearer credential verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Credential signature or structure is invalid.
    #[error("Invalid token")]
    InvalidToken,

    /// Credential is valid but past its expiry.
    #[error("Token expired")]
    TokenExpired,

    /// No credential was supplied.
    #[error("Missing credentials")]
    MissingCredentials,
}
