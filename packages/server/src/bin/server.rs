//! WebSocket echo server.
//!
//! Echoes every message received on `/echo` back to the sender and serves a
//! browser test page at `/`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hibiki-server -- --addr localhost:8080
//! ```

use clap::Parser;

use hibiki_server::ServerConfig;
use hibiki_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    // Run the server
    if let Err(e) = hibiki_server::run(config).await {
        tracing::error!("server error: {}", e);
        std::process::exit(1);
    }
}
