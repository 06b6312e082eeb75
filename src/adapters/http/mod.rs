//! HTTP adapters: routers, handlers, DTOs, and middleware.

pub mod billing;
pub mod middleware;
pub mod profile;
pub mod video;

use std::sync::Arc;

use axum::{routing::get, Json, Router};

use crate::ports::{
    OrderRepository, SettlementQueue, TokenVerifier, UsageLogRepository, UserRepository,
};

use billing::BillingAppState;
use middleware::{auth_middleware, AuthState};
use profile::ProfileAppState;
use video::VideoAppState;

/// Everything the HTTP surface needs, wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub usage_log: Arc<dyn UsageLogRepository>,
    pub settlement: Arc<dyn SettlementQueue>,
    pub token_verifier: Arc<dyn TokenVerifier>,
}

/// GET /health - liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Builds the application router.
///
/// All `/api` routes sit behind the bearer-auth middleware; `/health`
/// does not.
pub fn app(state: AppState) -> Router {
    let auth_state: AuthState = state.token_verifier.clone();

    let api = Router::new()
        .nest(
            "/video",
            video::video_routes().with_state(VideoAppState {
                users: state.users.clone(),
                usage_log: state.usage_log.clone(),
            }),
        )
        .nest(
            "/orders",
            billing::billing_routes().with_state(BillingAppState {
                orders: state.orders.clone(),
                settlement: state.settlement.clone(),
            }),
        )
        .nest(
            "/profile",
            profile::profile_routes().with_state(ProfileAppState {
                users: state.users.clone(),
            }),
        )
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ));

    Router::new().route("/health", get(health)).nest("/api", api)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockTokenVerifier;
    use crate::adapters::memory::{
        InMemoryOrderRepository, InMemoryUsageLogRepository, InMemoryUserRepository,
    };
    use crate::domain::foundation::{DomainError, OrderId};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    struct NullSettlementQueue;

    #[async_trait]
    impl SettlementQueue for NullSettlementQueue {
        async fn enqueue(&self, _order_id: OrderId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn test_app() -> Router {
        app(AppState {
            users: Arc::new(InMemoryUserRepository::new()),
            orders: Arc::new(InMemoryOrderRepository::new()),
            usage_log: Arc::new(InMemoryUsageLogRepository::new()),
            settlement: Arc::new(NullSettlementQueue),
            token_verifier: Arc::new(MockTokenVerifier::new()),
        })
    }

    #[tokio::test]
    async fn health_is_open() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn api_routes_require_auth() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/profile")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
