//! HTTP API server

use anyhow::Context;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;

pub mod endpoints;
pub mod handlers;
pub mod state;

pub use endpoints::StubEndpoint;
pub use state::{AppState, SERVICE_NAME};

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", generated_api())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Placeholder routes; GET and POST on `/test` are separate handlers.
fn generated_api() -> Router<AppState> {
    Router::new()
        .route(
            "/test",
            get(handlers::test_connectivity).post(handlers::test_send_data),
        )
        .route("/health", get(handlers::api_health))
        .route("/version", get(handlers::api_version))
        .route("/endpoints", get(handlers::list_endpoints))
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    let local_addr = listener.local_addr()?;
    tracing::info!(
        service = SERVICE_NAME,
        %local_addr,
        "Listening for HTTP traffic"
    );

    let router = create_router(AppState::from_config(config));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl-C, shutting down");
}
