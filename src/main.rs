//! Clear Accord server entry point.
//!
//! Loads configuration, wires the in-memory adapters to the application
//! handlers, and serves the screening API.

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use clear_accord::adapters::auth::{MockSessionValidator, TrustedGatewayValidator};
use clear_accord::adapters::http::middleware::{auth_middleware, AuthState};
use clear_accord::adapters::http::{screening_routes, ScreeningHandlers};
use clear_accord::adapters::memory::{InMemoryProfileRepository, InMemoryScreeningRepository};
use clear_accord::application::handlers::screening::{
    CheckScreeningStatusHandler, CompleteScreeningHandler, GetHealthProfileHandler,
    UpdateHealthProfileHandler,
};
use clear_accord::config::{AppConfig, AuthMode};
use clear_accord::ports::{HealthProfileRepository, ScreeningRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let app = build_app(&config);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "screening service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_app(config: &AppConfig) -> Router {
    // Repositories
    let profiles: Arc<dyn HealthProfileRepository> = Arc::new(InMemoryProfileRepository::new());
    let screenings: Arc<dyn ScreeningRepository> = Arc::new(InMemoryScreeningRepository::new());

    // Application handlers
    let handlers = ScreeningHandlers::new(
        Arc::new(CheckScreeningStatusHandler::new(profiles.clone())),
        Arc::new(CompleteScreeningHandler::new(
            profiles.clone(),
            screenings.clone(),
        )),
        Arc::new(GetHealthProfileHandler::new(profiles.clone())),
        Arc::new(UpdateHealthProfileHandler::new(profiles)),
    );

    // Session validation
    let validator: AuthState = match config.auth.mode {
        AuthMode::Trusted => Arc::new(TrustedGatewayValidator::new()),
        AuthMode::Mock => {
            tracing::warn!("using mock session validation");
            Arc::new(MockSessionValidator::new().with_test_user("dev-token", "dev-user"))
        }
    };

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new().allow_origin(origins);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api/screening", screening_routes(handlers))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                )))
                .layer(cors)
                .layer(axum::middleware::from_fn_with_state(
                    validator,
                    auth_middleware,
                )),
        )
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
