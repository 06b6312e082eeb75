//! In-memory implementation of UsageLogRepository.

use crate::domain::foundation::DomainError;
use crate::domain::usage::UsageLogEntry;
use crate::ports::UsageLogRepository;
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory append-only usage log.
#[derive(Default)]
pub struct InMemoryUsageLogRepository {
    entries: Mutex<Vec<UsageLogEntry>>,
}

impl InMemoryUsageLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all appended entries, for test assertions.
    pub fn entries(&self) -> Vec<UsageLogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl UsageLogRepository for InMemoryUsageLogRepository {
    async fn append(&self, entry: &UsageLogEntry) -> Result<(), DomainError> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::usage::{ActionKind, RequestOrigin};

    #[tokio::test]
    async fn append_accumulates_entries() {
        let repo = InMemoryUsageLogRepository::new();
        let entry = UsageLogEntry::record(
            UserId::new("user-1").unwrap(),
            ActionKind::Single,
            Some("clip.mp4".to_string()),
            Some(1024),
            RequestOrigin::unknown(),
        );

        repo.append(&entry).await.unwrap();
        repo.append(&entry).await.unwrap();

        assert_eq!(repo.entries().len(), 2);
        assert_eq!(repo.entries()[0].file_name, "clip.mp4");
    }
}
