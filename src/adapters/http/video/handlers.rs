//! HTTP handlers for the video processing endpoint.
//!
//! These handlers connect Axum routes to the usage application handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::usage::{ProcessVideoCommand, ProcessVideoHandler};
use crate::domain::usage::{QuotaEnforcer, RequestOrigin, UsageError};
use crate::ports::{UsageLogRepository, UserRepository};

use super::dto::{ErrorResponse, ProcessVideoData, ProcessVideoRequest, ProcessVideoResponse};
use crate::adapters::http::middleware::RequireAuth;

/// Shared state for the video processing routes.
#[derive(Clone)]
pub struct VideoAppState {
    pub users: Arc<dyn UserRepository>,
    pub usage_log: Arc<dyn UsageLogRepository>,
}

impl VideoAppState {
    pub fn process_video_handler(&self) -> ProcessVideoHandler {
        ProcessVideoHandler::new(
            self.users.clone(),
            self.usage_log.clone(),
            QuotaEnforcer::default(),
        )
    }
}

/// Extracts request provenance for the audit log.
fn request_origin(headers: &HeaderMap) -> RequestOrigin {
    RequestOrigin {
        ip_address: headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.split(',').next().unwrap_or(s).trim().to_string()),
        user_agent: headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
    }
}

/// POST /api/video/process - Run one metered processing action
pub async fn process_video(
    State(state): State<VideoAppState>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Json(request): Json<ProcessVideoRequest>,
) -> Result<impl IntoResponse, UsageApiError> {
    let handler = state.process_video_handler();
    let cmd = ProcessVideoCommand {
        user_id: user.user_id,
        action: request.action,
        file_name: request.file_name,
        file_size: request.file_size,
        origin: request_origin(&headers),
    };

    let result = handler.handle(cmd).await?;

    let response = ProcessVideoResponse {
        success: true,
        message: "Video processed".to_string(),
        data: ProcessVideoData {
            remaining_usage: result.remaining_daily,
            daily_usage: result.daily_usage,
            total_usage: result.total_usage,
            processing_time: result.processing_secs,
            download_url: "/downloads/processed_video.mp4".to_string(),
        },
    };

    Ok(Json(response))
}

/// API error type that converts usage errors to HTTP responses.
pub struct UsageApiError(UsageError);

impl From<UsageError> for UsageApiError {
    fn from(err: UsageError) -> Self {
        Self(err)
    }
}

impl IntoResponse for UsageApiError {
    fn into_response(self) -> axum::response::Response {
        use crate::domain::usage::DenyReason;

        let status = match &self.0 {
            UsageError::Denied(DenyReason::FileSizeExceeded { .. }) => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            UsageError::Denied(_) => StatusCode::FORBIDDEN,
            UsageError::UserNotFound(_) => StatusCode::NOT_FOUND,
            UsageError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
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
