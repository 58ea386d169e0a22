//! HTTP endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
    response::Html,
};

use crate::{page, state::AppState};

/// Serve the browser test page.
///
/// The page's inline script dials `ws://<host>/echo`, where `<host>` is
/// taken from the request's `Host` header so the page works wherever the
/// server is actually reachable. Requests without a `Host` header fall
/// back to the configured listen address.
pub async fn home(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Html<String> {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(&state.addr);

    Html(page::render(&format!("ws://{host}/echo")))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
