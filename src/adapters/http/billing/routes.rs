//! Axum router for the order endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_order, list_orders, BillingAppState};

/// Create the orders API router.
///
/// # Routes
///
/// - `POST /` - Place an order (settlement fires out of band)
/// - `GET /` - List the user's orders, newest first
pub fn billing_routes() -> Router<BillingAppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/", get(list_orders))
}
