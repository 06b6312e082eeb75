//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Bearer credential verification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret shared with the credential subsystem
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Validate auth configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::EmptyJwtSecret);
        }
        Ok(())
    }
}
