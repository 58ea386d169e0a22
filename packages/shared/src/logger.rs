//! Logger setup shared by the server and client binaries.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The filter is taken from `RUST_LOG` when set; otherwise it defaults to
/// `default_level` for the given binary and for `tower_http`.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed. Call this once,
/// at the top of `main`.
pub fn setup_logger(app_name: &str, default_level: &str) {
    // Crate targets use underscores even when the binary name has dashes.
    let target = app_name.replace('-', "_");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{target}={default_level},tower_http={default_level}"
        ))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
