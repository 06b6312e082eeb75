//! HTTP handlers for the profile endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::account::{
    GetProfileHandler, GetProfileQuery, UpdateProfileCommand, UpdateProfileHandler,
};
use crate::domain::usage::UsageError;
use crate::ports::UserRepository;

use super::dto::{ErrorResponse, ProfileResponse, UpdateProfileRequest};
use crate::adapters::http::middleware::RequireAuth;

/// Shared state for the profile routes.
#[derive(Clone)]
pub struct ProfileAppState {
    pub users: Arc<dyn UserRepository>,
}

impl ProfileAppState {
    pub fn get_profile_handler(&self) -> GetProfileHandler {
        GetProfileHandler::new(self.users.clone())
    }

    pub fn update_profile_handler(&self) -> UpdateProfileHandler {
        UpdateProfileHandler::new(self.users.clone())
    }
}

/// GET /api/profile - Current user's profile with a fresh quota window
pub async fn get_profile(
    State(state): State<ProfileAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ProfileApiError> {
    let handler = state.get_profile_handler();
    let account = handler
        .handle(GetProfileQuery {
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(ProfileResponse::from(account)))
}

/// PUT /api/profile - Update the user's display name
pub async fn update_profile(
    State(state): State<ProfileAppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, ProfileApiError> {
    let handler = state.update_profile_handler();
    let account = handler
        .handle(UpdateProfileCommand {
            user_id: user.user_id,
            username: request.username,
        })
        .await?;

    Ok(Json(ProfileResponse::from(account)))
}

/// API error type that converts profile errors to HTTP responses.
pub struct ProfileApiError(UsageError);

impl From<UsageError> for ProfileApiError {
    fn from(err: UsageError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ProfileApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            UsageError::UserNotFound(_) => StatusCode::NOT_FOUND,
            UsageError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            UsageError::Denied(_) => StatusCode::FORBIDDEN,
            UsageError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Storage details stay in the logs, not the response body.
        let body = if let UsageError::Infrastructure(_) = &self.0 {
            tracing::error!(error = %self.0, "request failed");
            ErrorResponse::new(self.0.code().to_string(), "Internal server error")
        } else {
            ErrorResponse::new(self.0.code().to_string(), self.0.message())
        };
        (status, Json(body)).into_response()
    }
}
