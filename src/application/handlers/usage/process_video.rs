//! ProcessVideoHandler - Command handler for the metered processing action.

use std::sync::Arc;

use crate::domain::account::UserAccount;
use crate::domain::foundation::{UsageDay, UserId};
use crate::domain::usage::{
    ActionKind, ActionRequest, QuotaEnforcer, RequestOrigin, UsageError, UsageLogEntry,
};
use crate::ports::{UsageLogRepository, UserRepository};

/// Command to run one processing action for a user.
#[derive(Debug, Clone)]
pub struct ProcessVideoCommand {
    pub user_id: UserId,
    /// Action label from the client; anything other than "batch" is a
    /// single action.
    pub action: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
    pub origin: RequestOrigin,
}

/// Result of an approved processing action.
#[derive(Debug, Clone)]
pub struct ProcessVideoResult {
    /// Post-action remaining daily quota (-1 = unlimited).
    pub remaining_daily: i64,
    pub daily_usage: u32,
    pub total_usage: u64,
    /// Simulated processing duration in seconds.
    pub processing_secs: u32,
}

/// Handler for the rate-limited processing action.
///
/// Orchestrates the quota path end to end: reconcile the usage window,
/// ask the enforcer for a decision, and on approval record the action and
/// append the audit entry. A denial still persists a window reset so the
/// rollover is durable, but never touches the counters.
pub struct ProcessVideoHandler {
    users: Arc<dyn UserRepository>,
    usage_log: Arc<dyn UsageLogRepository>,
    enforcer: QuotaEnforcer,
}

impl ProcessVideoHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        usage_log: Arc<dyn UsageLogRepository>,
        enforcer: QuotaEnforcer,
    ) -> Self {
        Self {
            users,
            usage_log,
            enforcer,
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessVideoCommand,
    ) -> Result<ProcessVideoResult, UsageError> {
        let mut account: UserAccount = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| UsageError::user_not_found(cmd.user_id.clone()))?;

        let today = UsageDay::today();
        let did_reset = account.reconcile(today);

        let kind = cmd
            .action
            .as_deref()
            .map(ActionKind::from_label)
            .unwrap_or(ActionKind::Single);
        let request = ActionRequest {
            kind,
            file_bytes: cmd.file_size,
        };

        let decision = self.enforcer.authorize(&mut account, &request, today);

        if let Some(reason) = decision.reason {
            // A rollover is durable even when the action is denied.
            if did_reset {
                self.users.update(&account).await?;
            }
            return Err(UsageError::denied(reason));
        }

        let (daily_usage, total_usage) = account.record_action(today);
        self.users.update(&account).await?;

        let entry = UsageLogEntry::record(
            cmd.user_id,
            kind,
            cmd.file_name,
            cmd.file_size,
            cmd.origin,
        );
        self.usage_log.append(&entry).await?;

        Ok(ProcessVideoResult {
            remaining_daily: decision.remaining_daily,
            daily_usage,
            total_usage,
            processing_secs: entry.processing_secs,
        })
    }
}
