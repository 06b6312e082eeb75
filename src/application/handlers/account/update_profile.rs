//! UpdateProfileHandler - Command handler for profile edits.

use std::sync::Arc;

use crate::domain::account::UserAccount;
use crate::domain::foundation::UserId;
use crate::domain::usage::UsageError;
use crate::ports::UserRepository;

/// Command to update the user's own profile.
///
/// Only the display name is client-editable. Tier changes go exclusively
/// through order settlement.
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub user_id: UserId,
    pub username: String,
}

/// Handler for profile updates.
pub struct UpdateProfileHandler {
    users: Arc<dyn UserRepository>,
}

impl UpdateProfileHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: UpdateProfileCommand) -> Result<UserAccount, UsageError> {
        if cmd.username.is_empty() {
            return Err(UsageError::validation("username", "cannot be empty"));
        }

        let mut account = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| UsageError::user_not_found(cmd.user_id.clone()))?;

        account.username = cmd.username;
        self.users.update(&account).await?;

        Ok(account)
    }
}
