//! Deferred settlement adapters.

mod tokio_queue;

pub use tokio_queue::{SettlementQueueConfig, TokioSettlementQueue};
