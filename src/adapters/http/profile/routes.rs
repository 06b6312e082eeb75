//! Axum router for the profile endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{get_profile, update_profile, ProfileAppState};

/// Create the profile API router.
///
/// # Routes
///
/// - `GET /` - Current user's profile (quota window reconciled)
/// - `PUT /` - Update display name
pub fn profile_routes() -> Router<ProfileAppState> {
    Router::new()
        .route("/", get(get_profile))
        .route("/", put(update_profile))
}
