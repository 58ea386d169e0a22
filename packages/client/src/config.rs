//! Client configuration.

use clap::Parser;

/// Command-line configuration for the echo client.
///
/// Parsed once at startup and passed explicitly into [`crate::run`].
#[derive(Debug, Clone, Parser)]
#[command(name = "hibiki-client", version, about = "WebSocket echo client")]
pub struct ClientConfig {
    /// Echo server address (host:port)
    #[arg(long, default_value = "localhost:8080")]
    pub addr: String,
}

impl ClientConfig {
    /// WebSocket URL of the echo endpoint.
    pub fn ws_url(&self) -> String {
        format!("ws://{}/echo", self.addr)
    }
}
