//! In-memory implementation of UserRepository.
//!
//! Backs tests and local development; not for production use.

use crate::domain::account::UserAccount;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::UserRepository;
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory user store over a mutex-guarded vector.
#[derive(Default)]
pub struct InMemoryUserRepository {
    accounts: Mutex<Vec<UserAccount>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with accounts.
    pub fn with_accounts(accounts: Vec<UserAccount>) -> Self {
        Self {
            accounts: Mutex::new(accounts),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, account: &UserAccount) -> Result<(), DomainError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.id == account.id) {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                "User already exists",
            ));
        }
        accounts.push(account.clone());
        Ok(())
    }

    async fn update(&self, account: &UserAccount) -> Result<(), DomainError> {
        let mut accounts = self.accounts.lock().unwrap();
        match accounts.iter().position(|a| a.id == account.id) {
            Some(pos) => {
                accounts[pos] = account.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::UserNotFound, "User not found")),
        }
    }

    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<UserAccount>, DomainError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.id == user_id)
            .cloned())
    }
}
