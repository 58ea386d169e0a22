//! Shared server state.

/// Shared application state, handed to handlers via `axum::extract::State`.
pub struct AppState {
    /// Configured listen address, used as the WebSocket URL host on the
    /// test page when the request carries no `Host` header.
    pub addr: String,
}
