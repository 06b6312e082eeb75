//! Axum router for the video processing endpoints.

use axum::{routing::post, Router};

use super::handlers::{process_video, VideoAppState};

/// Create the video API router.
///
/// # Routes
///
/// - `POST /process` - Run one metered processing action
pub fn video_routes() -> Router<VideoAppState> {
    Router::new().route("/process", post(process_video))
}
