//! Credential verification adapters.

mod jwt;
mod mock;

pub use jwt::{Claims, JwtTokenVerifier};
pub use mock::MockTokenVerifier;
