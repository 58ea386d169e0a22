//! Client error definitions.

use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Fatal client errors.
///
/// Every error here ends the session; there is no reconnect and no retry.
/// Read-side failures are not represented: the reader task handles them
/// locally by logging and signalling completion.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The WebSocket handshake failed
    #[error("failed to connect to {url}")]
    Connect {
        url: String,
        #[source]
        source: tungstenite::Error,
    },

    /// Sending a message (including the close frame) failed
    #[error("failed to send message")]
    Send(#[source] tungstenite::Error),
}
