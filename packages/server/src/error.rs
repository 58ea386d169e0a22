//! Server error definitions.

use thiserror::Error;

/// Fatal server errors.
///
/// Per-connection I/O failures are not represented here; they are logged and
/// terminate only the affected connection's echo loop.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Binding the listen address failed
    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop terminated unexpectedly
    #[error("server terminated unexpectedly")]
    Serve(#[source] std::io::Error),
}
