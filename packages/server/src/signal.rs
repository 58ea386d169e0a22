//! Shutdown signal handling.

/// Resolve when the process receives an interrupt (Ctrl-C).
///
/// Used as the graceful-shutdown trigger for the accept loop.
pub async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {error}");
        return;
    }
    tracing::info!("shutdown signal received");
}
