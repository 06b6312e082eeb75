//! HTTP DTOs for the video processing endpoint.

use serde::{Deserialize, Serialize};

/// Request to run a processing action.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessVideoRequest {
    /// Action label; "batch" requests batch processing, anything else
    /// (or absent) is a single action.
    #[serde(default)]
    pub action: Option<String>,
    /// Uploaded file name, for the audit log.
    #[serde(default)]
    pub file_name: Option<String>,
    /// Uploaded file size in bytes.
    #[serde(default)]
    pub file_size: Option<u64>,
}

/// Successful processing response.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessVideoResponse {
    pub success: bool,
    pub message: String,
    pub data: ProcessVideoData,
}

/// Usage counters and simulated output for an approved action.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessVideoData {
    /// Remaining daily quota after this action (-1 = unlimited).
    pub remaining_usage: i64,
    pub daily_usage: u32,
    pub total_usage: u64,
    /// Simulated processing duration in seconds.
    pub processing_time: u32,
    /// Where the processed output can be fetched.
    pub download_url: String,
}

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
