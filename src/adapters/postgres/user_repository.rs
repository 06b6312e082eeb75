//! PostgreSQL implementation of UserRepository.
//!
//! Provides persistent storage for UserAccount aggregates using
//! PostgreSQL. All ledger fields are written in one UPDATE keyed by user
//! id, so a window rollover and a usage increment land atomically.

use crate::domain::account::{UserAccount, UserTier};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UsageDay, UserId};
use crate::ports::UserRepository;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the UserRepository port.
///
/// Uses sqlx for type-safe database operations with connection pooling.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user account.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    user_tier: String,
    daily_usage: i32,
    total_usage: i64,
    last_usage_day: Option<NaiveDate>,
    subscription_end: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for UserAccount {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(UserAccount {
            id: UserId::new(row.id.to_string()).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid user id: {}", e))
            })?,
            username: row.username,
            email: row.email,
            // Unknown labels degrade to free rather than failing the read.
            tier: UserTier::from_label(&row.user_tier),
            daily_usage: row.daily_usage.max(0) as u32,
            total_usage: row.total_usage.max(0) as u64,
            last_usage_day: row.last_usage_day.map(UsageDay::from_date),
            subscription_end: row.subscription_end.map(Timestamp::from_datetime),
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

pub(super) fn parse_user_id_as_uuid(user_id: &UserId) -> Result<Uuid, DomainError> {
    Uuid::parse_str(user_id.as_str()).map_err(|e| {
        DomainError::new(
            ErrorCode::ValidationFailed,
            format!("User ID must be a valid UUID: {}", e),
        )
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, account: &UserAccount) -> Result<(), DomainError> {
        let user_uuid = parse_user_id_as_uuid(&account.id)?;

        sqlx::query(
            r#"
            INSERT INTO users (
                id, username, email, user_tier, daily_usage, total_usage,
                last_usage_day, subscription_end, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(user_uuid)
        .bind(&account.username)
        .bind(&account.email)
        .bind(account.tier.label())
        .bind(account.daily_usage as i32)
        .bind(account.total_usage as i64)
        .bind(account.last_usage_day.map(|d| d.as_date()))
        .bind(account.subscription_end.map(|t| *t.as_datetime()))
        .bind(account.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to insert user: {}", e))
        })?;

        Ok(())
    }

    async fn update(&self, account: &UserAccount) -> Result<(), DomainError> {
        let user_uuid = parse_user_id_as_uuid(&account.id)?;

        let result = sqlx::query(
            r#"
            UPDATE users SET
                username = $2,
                email = $3,
                user_tier = $4,
                daily_usage = $5,
                total_usage = $6,
                last_usage_day = $7,
                subscription_end = $8
            WHERE id = $1
            "#,
        )
        .bind(user_uuid)
        .bind(&account.username)
        .bind(&account.email)
        .bind(account.tier.label())
        .bind(account.daily_usage as i32)
        .bind(account.total_usage as i64)
        .bind(account.last_usage_day.map(|d| d.as_date()))
        .bind(account.subscription_end.map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to update user: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<UserAccount>, DomainError> {
        let user_uuid = parse_user_id_as_uuid(user_id)?;

        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, user_tier, daily_usage, total_usage,
                   last_usage_day, subscription_end, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_uuid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to fetch user: {}", e))
        })?;

        row.map(UserAccount::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_maps_to_account() {
        let row = UserRow {
            id: Uuid::new_v4(),
            username: "casey".to_string(),
            email: "casey@example.com".to_string(),
            user_tier: "paid".to_string(),
            daily_usage: 2,
            total_usage: 40,
            last_usage_day: NaiveDate::from_ymd_opt(2024, 6, 15),
            subscription_end: None,
            created_at: Utc::now(),
        };

        let account = UserAccount::try_from(row).unwrap();
        assert_eq!(account.tier, UserTier::Paid);
        assert_eq!(account.daily_usage, 2);
        assert_eq!(account.total_usage, 40);
        assert_eq!(
            account.last_usage_day,
            UsageDay::from_ymd(2024, 6, 15)
        );
    }

    #[test]
    fn unknown_tier_label_degrades_to_free() {
        let row = UserRow {
            id: Uuid::new_v4(),
            username: "casey".to_string(),
            email: "casey@example.com".to_string(),
            user_tier: "platinum".to_string(),
            daily_usage: 0,
            total_usage: 0,
            last_usage_day: None,
            subscription_end: None,
            created_at: Utc::now(),
        };

        let account = UserAccount::try_from(row).unwrap();
        assert_eq!(account.tier, UserTier::Free);
    }

    #[test]
    fn negative_counters_clamp_to_zero() {
        let row = UserRow {
            id: Uuid::new_v4(),
            username: "casey".to_string(),
            email: "casey@example.com".to_string(),
            user_tier: "free".to_string(),
            daily_usage: -1,
            total_usage: -10,
            last_usage_day: None,
            subscription_end: None,
            created_at: Utc::now(),
        };

        let account = UserAccount::try_from(row).unwrap();
        assert_eq!(account.daily_usage, 0);
        assert_eq!(account.total_usage, 0);
    }

    #[test]
    fn non_uuid_user_id_is_rejected() {
        let result = parse_user_id_as_uuid(&UserId::new("not-a-uuid").unwrap());
        assert!(result.is_err());
    }
}
