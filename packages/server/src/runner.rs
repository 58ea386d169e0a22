//! Server bootstrap: router construction and the accept loop.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    error::ServerError,
    handler::{echo_handler, health_check, home},
    signal::shutdown_signal,
    state::AppState,
};

/// Build the router serving the test page, the health endpoint, and the
/// echo WebSocket.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/echo", get(echo_handler))
        .route("/api/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until a shutdown signal arrives.
///
/// Each accepted connection runs its own handler task; a connection's
/// failure never affects the others.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let state = Arc::new(AppState {
        addr: config.addr.clone(),
    });
    let app = build_router(state);

    let listener =
        tokio::net::TcpListener::bind(&config.addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: config.addr.clone(),
                source,
            })?;

    tracing::info!("listening on {}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}
