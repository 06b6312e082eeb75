//! Usage log repository port.

use crate::domain::foundation::DomainError;
use crate::domain::usage::UsageLogEntry;
use async_trait::async_trait;

/// Append-only store for usage audit records.
///
/// The core writes one entry per accepted action and never reads them
/// back; there is deliberately no query surface here.
#[async_trait]
pub trait UsageLogRepository: Send + Sync {
    /// Append an audit record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn append(&self, entry: &UsageLogEntry) -> Result<(), DomainError>;
}
