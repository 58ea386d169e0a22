//! WebSocket echo client.
//!
//! Dials an echo server, logs everything the server sends back on a
//! background reader task, and runs a foreground control loop that sends a
//! timestamp heartbeat every five seconds. An interrupt (Ctrl-C) triggers an
//! orderly close handshake bounded by a ten-second grace period.

pub mod config;
pub mod error;
mod runner;

pub use config::ClientConfig;
pub use error::ClientError;
pub use runner::{
    CLOSE_GRACE_PERIOD, CloseOutcome, HEARTBEAT_PERIOD, control_loop, read_messages, run,
};
