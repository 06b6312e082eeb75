//! Usage audit log entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UsageLogId, UserId};

use super::ActionKind;

/// Where a request came from, for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOrigin {
    /// Originating address as reported by the edge.
    pub ip_address: Option<String>,
    /// Client identifier string (User-Agent).
    pub user_agent: Option<String>,
}

impl RequestOrigin {
    pub fn unknown() -> Self {
        Self {
            ip_address: None,
            user_agent: None,
        }
    }
}

/// Immutable audit record for one accepted processing action.
///
/// Append-only: created once per accepted action, never mutated and never
/// read back by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageLogEntry {
    pub id: UsageLogId,
    pub user_id: UserId,
    pub action: ActionKind,
    pub file_name: String,
    pub file_bytes: u64,
    /// Simulated processing duration in seconds.
    pub processing_secs: u32,
    pub origin: RequestOrigin,
    pub created_at: Timestamp,
}

impl UsageLogEntry {
    /// Records an accepted action.
    ///
    /// The processing duration is simulated deterministically from the
    /// file size: one second per MiB on top of a 10 s floor, capped at
    /// the 40 s ceiling the processing simulator advertises.
    pub fn record(
        user_id: UserId,
        action: ActionKind,
        file_name: Option<String>,
        file_bytes: Option<u64>,
        origin: RequestOrigin,
    ) -> Self {
        let file_bytes = file_bytes.unwrap_or(0);
        Self {
            id: UsageLogId::new(),
            user_id,
            action,
            file_name: file_name.unwrap_or_else(|| "unknown".to_string()),
            file_bytes,
            processing_secs: simulated_duration_secs(file_bytes),
            origin,
            created_at: Timestamp::now(),
        }
    }
}

/// Simulated processing time for a file of the given size.
pub fn simulated_duration_secs(file_bytes: u64) -> u32 {
    const MIB: u64 = 1024 * 1024;
    let scaled = 10 + (file_bytes / MIB);
    scaled.min(40) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    #[test]
    fn record_fills_defaults_for_missing_fields() {
        let entry = UsageLogEntry::record(
            user_id(),
            ActionKind::Single,
            None,
            None,
            RequestOrigin::unknown(),
        );

        assert_eq!(entry.file_name, "unknown");
        assert_eq!(entry.file_bytes, 0);
        assert!(entry.origin.ip_address.is_none());
    }

    #[test]
    fn record_preserves_provided_metadata() {
        let origin = RequestOrigin {
            ip_address: Some("203.0.113.9".to_string()),
            user_agent: Some("vidforge-cli/1.2".to_string()),
        };
        let entry = UsageLogEntry::record(
            user_id(),
            ActionKind::Batch,
            Some("holiday.mp4".to_string()),
            Some(12 * 1024 * 1024),
            origin.clone(),
        );

        assert_eq!(entry.action, ActionKind::Batch);
        assert_eq!(entry.file_name, "holiday.mp4");
        assert_eq!(entry.file_bytes, 12 * 1024 * 1024);
        assert_eq!(entry.origin, origin);
    }

    #[test]
    fn entries_get_unique_ids() {
        let a = UsageLogEntry::record(
            user_id(),
            ActionKind::Single,
            None,
            None,
            RequestOrigin::unknown(),
        );
        let b = UsageLogEntry::record(
            user_id(),
            ActionKind::Single,
            None,
            None,
            RequestOrigin::unknown(),
        );
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn simulated_duration_has_ten_second_floor() {
        assert_eq!(simulated_duration_secs(0), 10);
        assert_eq!(simulated_duration_secs(1024), 10);
    }

    #[test]
    fn simulated_duration_scales_with_size() {
        assert_eq!(simulated_duration_secs(5 * 1024 * 1024), 15);
    }

    #[test]
    fn simulated_duration_caps_at_forty_seconds() {
        assert_eq!(simulated_duration_secs(2 * 1024 * 1024 * 1024), 40);
    }
}
