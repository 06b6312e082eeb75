//! HTTP handlers for the order endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::billing::{
    CreateOrderCommand, CreateOrderHandler, ListOrdersHandler, ListOrdersQuery,
};
use crate::domain::billing::BillingError;
use crate::ports::{OrderRepository, SettlementQueue};

use super::dto::{CreateOrderRequest, CreateOrderResponse, ErrorResponse, OrderResponse};
use crate::adapters::http::middleware::RequireAuth;

/// Shared state for the order routes.
#[derive(Clone)]
pub struct BillingAppState {
    pub orders: Arc<dyn OrderRepository>,
    pub settlement: Arc<dyn SettlementQueue>,
}

impl BillingAppState {
    pub fn create_order_handler(&self) -> CreateOrderHandler {
        CreateOrderHandler::new(self.orders.clone(), self.settlement.clone())
    }

    pub fn list_orders_handler(&self) -> ListOrdersHandler {
        ListOrdersHandler::new(self.orders.clone())
    }
}

/// POST /api/orders - Place an order and schedule its settlement
pub async fn create_order(
    State(state): State<BillingAppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, BillingApiError> {
    let handler = state.create_order_handler();
    let cmd = CreateOrderCommand {
        user_id: user.user_id,
        mode: request.mode,
        plan_type: request.plan_type,
        duration: request.duration,
        amount_cents: request.amount_cents,
        payment_method: request.payment_method,
    };

    let result = handler.handle(cmd).await?;

    let order_number = result.order.order_number.to_string();
    let response = CreateOrderResponse {
        success: true,
        payment_url: format!("/payment/process/{}", order_number),
        order_number,
        message: "Order created, awaiting payment".to_string(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/orders - List the user's orders, newest first
pub async fn list_orders(
    State(state): State<BillingAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, BillingApiError> {
    let handler = state.list_orders_handler();
    let orders = handler
        .handle(ListOrdersQuery {
            user_id: user.user_id,
        })
        .await?;

    let response: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
    Ok(Json(response))
}

/// API error type that converts billing errors to HTTP responses.
pub struct BillingApiError(BillingError);

impl From<BillingError> for BillingApiError {
    fn from(err: BillingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for BillingApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            BillingError::OrderNotFound(_) | BillingError::UserNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            BillingError::InvalidState { .. } => StatusCode::CONFLICT,
            BillingError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            BillingError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Storage details stay in the logs, not the response body.
        let body = if let BillingError::Infrastructure(_) = &self.0 {
            tracing::error!(error = %self.0, "request failed");
            ErrorResponse::new(self.0.code().to_string(), "Internal server error")
        } else {
            ErrorResponse::new(self.0.code().to_string(), self.0.message())
        };
        (status, Json(body)).into_response()
    }
}
