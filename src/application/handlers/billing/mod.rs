//! Billing command/query handlers.

mod create_order;
mod list_orders;
mod settle_order;

pub use create_order::{CreateOrderCommand, CreateOrderHandler, CreateOrderResult};
pub use list_orders::{ListOrdersHandler, ListOrdersQuery};
pub use settle_order::{
    SettleOrderCommand, SettleOrderHandler, SettleOrderResult, SettleOutcome,
};
