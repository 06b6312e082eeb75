//! Mock TokenVerifier for tests.
//!
//! Treats the bearer token itself as the user id, so tests can
//! authenticate as anyone without minting JWTs.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::TokenVerifier;

/// Verifier that accepts any non-empty token as the subject id.
#[derive(Default)]
pub struct MockTokenVerifier;

impl MockTokenVerifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TokenVerifier for MockTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let user_id = UserId::new(token).map_err(|_| AuthError::InvalidToken)?;
        Ok(AuthenticatedUser::new(user_id))
    }
}
