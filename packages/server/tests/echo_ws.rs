//! WebSocket echo integration tests.
//!
//! Round-trip identity, type preservation, ordering, and connection
//! lifecycle on the `/echo` endpoint.

mod fixtures;
use fixtures::TestServer;

use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::{connect_async, tungstenite::Message};

#[tokio::test]
async fn test_echo_round_trip_text() {
    // given
    let server = TestServer::start().await;
    let (mut ws, _) = connect_async(server.ws_url())
        .await
        .expect("Failed to connect");

    // when
    ws.send(Message::text("hello")).await.expect("Failed to send");

    // then
    let echoed = ws
        .next()
        .await
        .expect("Connection closed early")
        .expect("Read failed");
    assert_eq!(echoed, Message::text("hello"));
}

#[tokio::test]
async fn test_echo_round_trip_binary() {
    // given
    let server = TestServer::start().await;
    let (mut ws, _) = connect_async(server.ws_url())
        .await
        .expect("Failed to connect");

    // when
    let payload: Vec<u8> = (0u8..32).collect();
    ws.send(Message::binary(payload.clone()))
        .await
        .expect("Failed to send");

    // then: same type tag, identical bytes
    match ws
        .next()
        .await
        .expect("Connection closed early")
        .expect("Read failed")
    {
        Message::Binary(echoed) => assert_eq!(echoed.as_ref(), payload.as_slice()),
        other => panic!("expected a binary echo, got {other:?}"),
    }
}

#[tokio::test]
async fn test_echo_preserves_order() {
    // given
    let server = TestServer::start().await;
    let (mut ws, _) = connect_async(server.ws_url())
        .await
        .expect("Failed to connect");

    // when: three messages in sequence, including an empty one
    for text in ["hello", "foo", ""] {
        ws.send(Message::text(text)).await.expect("Failed to send");
    }

    // then: three echoes, same order, nothing dropped
    for expected in ["hello", "foo", ""] {
        let echoed = ws
            .next()
            .await
            .expect("Connection closed early")
            .expect("Read failed");
        assert_eq!(echoed, Message::text(expected));
    }
}

#[tokio::test]
async fn test_close_ends_connection() {
    // given
    let server = TestServer::start().await;
    let (mut ws, _) = connect_async(server.ws_url())
        .await
        .expect("Failed to connect");

    // when
    ws.close(None).await.expect("Failed to close");

    // then: nothing but the close handshake comes back
    loop {
        match ws.next().await {
            Some(Ok(Message::Close(_))) => continue,
            Some(Ok(other)) => panic!("unexpected message after close: {other:?}"),
            Some(Err(_)) | None => break,
        }
    }
}

#[tokio::test]
async fn test_connections_are_independent() {
    // given
    let server = TestServer::start().await;

    // when: the first connection is torn down without a close handshake
    let (mut first, _) = connect_async(server.ws_url())
        .await
        .expect("Failed to connect");
    first
        .send(Message::text("first"))
        .await
        .expect("Failed to send");
    let echoed = first
        .next()
        .await
        .expect("Connection closed early")
        .expect("Read failed");
    assert_eq!(echoed, Message::text("first"));
    drop(first);

    // then: the server still serves new connections
    let (mut second, _) = connect_async(server.ws_url())
        .await
        .expect("Failed to connect");
    second
        .send(Message::text("second"))
        .await
        .expect("Failed to send");
    let echoed = second
        .next()
        .await
        .expect("Connection closed early")
        .expect("Read failed");
    assert_eq!(echoed, Message::text("second"));
}
