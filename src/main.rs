//! VidForge backend entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use vidforge::adapters::auth::JwtTokenVerifier;
use vidforge::adapters::http::{app, AppState};
use vidforge::adapters::postgres::{
    PostgresOrderRepository, PostgresUsageLogRepository, PostgresUserRepository,
};
use vidforge::adapters::settlement::{SettlementQueueConfig, TokioSettlementQueue};
use vidforge::application::handlers::billing::SettleOrderHandler;
use vidforge::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!().run(&pool).await?;

    let users = Arc::new(PostgresUserRepository::new(pool.clone()));
    let orders = Arc::new(PostgresOrderRepository::new(pool.clone()));
    let usage_log = Arc::new(PostgresUsageLogRepository::new(pool.clone()));

    let settle_handler = Arc::new(SettleOrderHandler::new(orders.clone(), users.clone()));
    let settlement = Arc::new(TokioSettlementQueue::new(
        settle_handler,
        SettlementQueueConfig {
            delay: Duration::from_secs(config.billing.settlement_delay_secs),
            max_attempts: config.billing.settlement_max_attempts,
            initial_backoff: Duration::from_secs(config.billing.settlement_backoff_secs),
        },
    ));

    let token_verifier = Arc::new(JwtTokenVerifier::new(&config.auth.jwt_secret));

    let state = AppState {
        users,
        orders,
        usage_log,
        settlement: settlement.clone(),
        token_verifier,
    };

    let cors = match config.server.cors_origins_list().as_slice() {
        [] => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        origins => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let router = app(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "vidforge listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;

    // Let in-flight settlements finish before the process exits.
    settlement.drain().await;

    Ok(())
}
