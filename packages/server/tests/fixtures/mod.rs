//! Test fixtures.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc};

use hibiki_server::{build_router, state::AppState};

/// An echo server bound to an ephemeral port for the duration of a test.
pub struct TestServer {
    addr: SocketAddr,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Bind `127.0.0.1:0` and serve the real router in a background task.
    ///
    /// The listener is bound before the task is spawned, so the server is
    /// ready to accept as soon as this returns.
    pub async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no local addr");

        let state = Arc::new(AppState {
            addr: addr.to_string(),
        });
        let app = build_router(state);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/echo", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
