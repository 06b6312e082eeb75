//! User account repository port.
//!
//! Defines the contract for persisting and retrieving UserAccount
//! aggregates. The store is the single source of truth for the ledger;
//! conflicting writes are serialized at the storage layer.

use crate::domain::account::UserAccount;
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

/// Repository port for UserAccount persistence.
///
/// Implementations must write all ledger fields (daily_usage, total_usage,
/// last_usage_day) in a single update so a rollover and an increment can
/// never be split across writes.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, account: &UserAccount) -> Result<(), DomainError>;

    /// Update an existing account.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the account doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, account: &UserAccount) -> Result<(), DomainError>;

    /// Find an account by user id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<UserAccount>, DomainError>;
}
