//! Bearer credential verification port.
//!
//! Credential issuance is an external collaborator; the backend only ever
//! verifies an opaque bearer credential and extracts the subject id.
//! Keeping verification behind a port means the middleware doesn't change
//! whether the adapter is HS256 JWT, an introspection endpoint, or a mock.

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use async_trait::async_trait;

/// Verifies a bearer credential and resolves the subject identity.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify the credential and return the identity it carries.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` if the credential fails verification
    /// - `TokenExpired` if the credential is past its expiry
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_verifier_is_object_safe() {
        fn _accepts_dyn(_verifier: &dyn TokenVerifier) {}
    }
}
