//! Usage domain: quota enforcement and the audit log.

mod enforcer;
mod errors;
mod log_entry;

pub use enforcer::{
    ActionKind, ActionRequest, Decision, DenyReason, QuotaEnforcer, UNLIMITED,
};
pub use errors::UsageError;
pub use log_entry::{simulated_duration_secs, RequestOrigin, UsageLogEntry};
