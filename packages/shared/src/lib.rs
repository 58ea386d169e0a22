//! Shared utilities for the Hibiki echo demo.
//!
//! Cross-cutting helpers used by both the server and the client binary:
//! logger setup and timestamp formatting.

pub mod logger;
pub mod time;
