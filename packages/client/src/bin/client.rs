//! WebSocket echo client.
//!
//! Connects to an echo server, prints everything it sends back, and sends a
//! timestamp heartbeat every five seconds. Ctrl-C closes the connection
//! cleanly.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hibiki-client -- --addr localhost:8080
//! ```

use clap::Parser;

use hibiki_client::ClientConfig;
use hibiki_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ClientConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    // Run the client
    if let Err(e) = hibiki_client::run(config).await {
        tracing::error!("client error: {}", e);
        std::process::exit(1);
    }
}
