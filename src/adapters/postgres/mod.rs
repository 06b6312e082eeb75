//! PostgreSQL adapters.

mod order_repository;
mod usage_log_repository;
mod user_repository;

pub use order_repository::PostgresOrderRepository;
pub use usage_log_repository::PostgresUsageLogRepository;
pub use user_repository::PostgresUserRepository;
