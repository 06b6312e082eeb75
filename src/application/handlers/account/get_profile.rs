//! GetProfileHandler - Query handler for the authenticated user's profile.

use std::sync::Arc;

use crate::domain::account::UserAccount;
use crate::domain::foundation::{UsageDay, UserId};
use crate::domain::usage::UsageError;
use crate::ports::UserRepository;

/// Query for the current user's profile.
#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub user_id: UserId,
}

/// Handler returning the profile with a fresh quota window.
///
/// Reads reconcile too: a client polling its profile after midnight must
/// see daily_usage as 0, and the reset is persisted so enforcement and
/// reads agree on the ledger. Reconciliation is idempotent, so at most
/// one write happens per day per user on this path.
pub struct GetProfileHandler {
    users: Arc<dyn UserRepository>,
}

impl GetProfileHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<UserAccount, UsageError> {
        let mut account = self
            .users
            .find_by_id(&query.user_id)
            .await?
            .ok_or_else(|| UsageError::user_not_found(query.user_id.clone()))?;

        if account.reconcile(UsageDay::today()) {
            self.users.update(&account).await?;
        }

        Ok(account)
    }
}
