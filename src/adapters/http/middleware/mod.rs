//! HTTP middleware.

mod auth;

pub use auth::{auth_middleware, AuthRequired, AuthState, RequireAuth};
