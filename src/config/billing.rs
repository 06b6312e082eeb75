//! Billing configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Deferred settlement configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Seconds between order creation and the first settlement attempt
    #[serde(default = "default_settlement_delay")]
    pub settlement_delay_secs: u64,

    /// Total settlement attempts per order, including the first
    #[serde(default = "default_max_attempts")]
    pub settlement_max_attempts: u32,

    /// Backoff before the first retry, in seconds (doubles per retry)
    #[serde(default = "default_backoff")]
    pub settlement_backoff_secs: u64,
}

impl BillingConfig {
    /// Validate billing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.settlement_max_attempts == 0 {
            return Err(ValidationError::InvalidMaxAttempts);
        }
        Ok(())
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            settlement_delay_secs: default_settlement_delay(),
            settlement_max_attempts: default_max_attempts(),
            settlement_backoff_secs: default_backoff(),
        }
    }
}

fn default_settlement_delay() -> u64 {
    2
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff() -> u64 {
    1
}
