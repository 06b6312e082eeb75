//! PostgreSQL implementation of UsageLogRepository.

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::usage::UsageLogEntry;
use crate::ports::UsageLogRepository;
use async_trait::async_trait;
use sqlx::PgPool;

use super::user_repository::parse_user_id_as_uuid;

/// PostgreSQL implementation of the UsageLogRepository port.
///
/// Insert-only; the table has no update path.
pub struct PostgresUsageLogRepository {
    pool: PgPool,
}

impl PostgresUsageLogRepository {
    /// Creates a new PostgresUsageLogRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsageLogRepository for PostgresUsageLogRepository {
    async fn append(&self, entry: &UsageLogEntry) -> Result<(), DomainError> {
        let user_uuid = parse_user_id_as_uuid(&entry.user_id)?;

        sqlx::query(
            r#"
            INSERT INTO usage_logs (
                id, user_id, action, file_name, file_bytes, processing_secs,
                ip_address, user_agent, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(entry.id.as_uuid())
        .bind(user_uuid)
        .bind(entry.action.label())
        .bind(&entry.file_name)
        .bind(entry.file_bytes as i64)
        .bind(entry.processing_secs as i32)
        .bind(&entry.origin.ip_address)
        .bind(&entry.origin.user_agent)
        .bind(entry.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to append usage log: {}", e),
            )
        })?;

        Ok(())
    }
}
