//! Maintenance server entry point.
//!
//! Builds the route table, wires it into the Axum router with tracing,
//! CORS, and security-header middleware, then serves with graceful
//! shutdown on SIGINT/SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use maintenance_server::config::ServerConfig;
use maintenance_server::routes;
use maintenance_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment.
    let config = ServerConfig::from_env();

    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    // Build and validate the route table before accepting traffic — a
    // duplicate name or a bad pattern is a deploy-stopper, not a 500.
    let table = routes::table().context("route table construction failed")?;
    info!(routes = table.len(), "maintenance route table built");

    let state = Arc::new(AppState::new(table));
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "maintenance server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("maintenance server stopped");
    Ok(())
}

/// Attach middleware around the declared routes.
fn build_router(state: Arc<AppState>) -> Router {
    // CORS — the module's AJAX endpoints are called from the inventory
    // web pages; restrict methods to what the table declares.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
