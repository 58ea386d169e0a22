//! WebSocket echo handler.

use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::IntoResponse,
};

/// Promote the request to a WebSocket connection and run the echo loop.
///
/// A failed upgrade is logged and the request abandoned; nothing is retried.
pub async fn echo_handler(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_failed_upgrade(|error| tracing::error!("upgrade: {error}"))
        .on_upgrade(handle_socket)
}

/// Echo every message back to the peer until the first I/O error in either
/// direction. Reads and writes strictly alternate; the connection is
/// released when this function returns, whichever branch exits the loop.
async fn handle_socket(mut socket: WebSocket) {
    while let Some(received) = socket.recv().await {
        let message = match received {
            Ok(message) => message,
            Err(error) => {
                tracing::error!("read: {error}");
                break;
            }
        };

        match &message {
            Message::Text(text) => tracing::info!("recv: {text}"),
            Message::Binary(payload) => tracing::info!("recv: {} bytes", payload.len()),
            Message::Close(_) => {
                tracing::info!("client requested close");
                break;
            }
            // Ping/pong is handled by the protocol layer; nothing to echo.
            _ => continue,
        }

        if let Err(error) = socket.send(message).await {
            tracing::error!("write: {error}");
            break;
        }
    }
}
