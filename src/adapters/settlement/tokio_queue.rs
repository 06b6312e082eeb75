//! Tokio implementation of the SettlementQueue port.
//!
//! Simulates the external payment processor's confirmation: each enqueued
//! order settles after a fixed delay on a spawned task. Failed attempts
//! retry with exponential backoff up to a bounded attempt count; an order
//! whose settlement exhausts its retries stays pending and the failure is
//! logged. Spawned work is tracked so it can be drained on shutdown (and
//! awaited deterministically in tests).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::application::handlers::billing::{SettleOrderCommand, SettleOrderHandler};
use crate::domain::foundation::{DomainError, OrderId};
use crate::ports::SettlementQueue;

/// Timing and retry policy for deferred settlement.
#[derive(Debug, Clone)]
pub struct SettlementQueueConfig {
    /// Delay between order creation and the first settlement attempt.
    pub delay: Duration,
    /// Total attempts per order, including the first.
    pub max_attempts: u32,
    /// Backoff before the first retry; doubles per retry.
    pub initial_backoff: Duration,
}

impl Default for SettlementQueueConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(2),
            max_attempts: 3,
            initial_backoff: Duration::from_secs(1),
        }
    }
}

impl SettlementQueueConfig {
    /// Zero-delay config for tests.
    pub fn immediate() -> Self {
        Self {
            delay: Duration::ZERO,
            max_attempts: 3,
            initial_backoff: Duration::ZERO,
        }
    }
}

/// Settlement queue backed by spawned tokio tasks.
pub struct TokioSettlementQueue {
    handler: Arc<SettleOrderHandler>,
    config: SettlementQueueConfig,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl TokioSettlementQueue {
    pub fn new(handler: Arc<SettleOrderHandler>, config: SettlementQueueConfig) -> Self {
        Self {
            handler,
            config,
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Await every settlement task scheduled so far.
    ///
    /// Used on graceful shutdown so in-flight settlements finish, and in
    /// tests to observe settlement deterministically.
    pub async fn drain(&self) {
        let handles: Vec<JoinHandle<()>> = self.tasks.lock().unwrap().drain(..).collect();
        for handle in handles {
            let _ = handle.await;
        }
    }
}

#[async_trait]
impl SettlementQueue for TokioSettlementQueue {
    async fn enqueue(&self, order_id: OrderId) -> Result<(), DomainError> {
        let handler = self.handler.clone();
        let config = self.config.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(config.delay).await;

            let mut backoff = config.initial_backoff;
            for attempt in 1..=config.max_attempts {
                match handler.handle(SettleOrderCommand { order_id }).await {
                    Ok(_) => return,
                    Err(e) if e.is_retryable() && attempt < config.max_attempts => {
                        tracing::warn!(
                            order_id = %order_id,
                            attempt,
                            error = %e,
                            "settlement attempt failed, retrying"
                        );
                        tokio::time::sleep(backoff).await;
                        backoff *= 2;
                    }
                    Err(e) => {
                        tracing::error!(
                            order_id = %order_id,
                            attempt,
                            error = %e,
                            "settlement failed, order stays pending"
                        );
                        return;
                    }
                }
            }
        });

        self.tasks.lock().unwrap().push(handle);
        Ok(())
    }
}
