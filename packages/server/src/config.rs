//! Server configuration.

use clap::Parser;

/// Command-line configuration for the echo server.
///
/// Parsed once at startup and passed explicitly into [`crate::run`].
#[derive(Debug, Clone, Parser)]
#[command(name = "hibiki-server", version, about = "WebSocket echo server")]
pub struct ServerConfig {
    /// Listen address (host:port)
    #[arg(long, default_value = "localhost:8080")]
    pub addr: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr() {
        let config = ServerConfig::parse_from(["hibiki-server"]);
        assert_eq!(config.addr, "localhost:8080");
    }

    #[test]
    fn test_addr_flag_overrides_default() {
        let config = ServerConfig::parse_from(["hibiki-server", "--addr", "0.0.0.0:9001"]);
        assert_eq!(config.addr, "0.0.0.0:9001");
    }
}
