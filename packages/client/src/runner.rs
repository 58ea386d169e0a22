//! Client session: reader task and heartbeat/shutdown control loop.

use std::{future::Future, time::Duration};

use futures_util::{Sink, SinkExt, Stream, StreamExt};
use tokio::{
    sync::oneshot,
    time::{self, MissedTickBehavior},
};
use tokio_tungstenite::{
    connect_async,
    tungstenite::{
        Error as WsError, Message, Utf8Bytes,
        protocol::{CloseFrame, frame::coding::CloseCode},
    },
};

use hibiki_shared::time::{now_timestamp, timestamp_to_rfc3339};

use crate::{config::ClientConfig, error::ClientError};

/// Interval between heartbeat messages.
pub const HEARTBEAT_PERIOD: Duration = Duration::from_secs(5);

/// How long to wait for the peer to acknowledge a close frame before
/// giving up.
pub const CLOSE_GRACE_PERIOD: Duration = Duration::from_secs(10);

/// How a client session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The reader finished first: the peer closed the connection or a read
    /// failed before any shutdown was initiated on this side.
    ReaderDone,
    /// We sent a close frame and the peer acknowledged it within the grace
    /// period.
    Acknowledged,
    /// We sent a close frame and the grace period elapsed without an
    /// acknowledgement.
    TimedOut,
}

/// Dial the configured echo server and run a session until the connection
/// ends or the process is interrupted.
///
/// A handshake failure is fatal: nothing is spawned and the error is
/// returned as [`ClientError::Connect`].
pub async fn run(config: ClientConfig) -> Result<(), ClientError> {
    let url = config.ws_url();
    tracing::info!("connecting to {url}");

    let (stream, _response) =
        connect_async(url.as_str())
            .await
            .map_err(|source| ClientError::Connect {
                url: url.clone(),
                source,
            })?;
    tracing::info!("connected to {url}");

    let (write, read) = stream.split();

    let (done_tx, done_rx) = oneshot::channel();
    let reader = tokio::spawn(read_messages(read, done_tx));

    let interrupt = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for interrupt: {error}");
            std::future::pending::<()>().await;
        }
    };

    let outcome = control_loop(write, done_rx, interrupt, HEARTBEAT_PERIOD, CLOSE_GRACE_PERIOD)
        .await;

    // Dropping the socket halves releases the connection on every exit
    // path; the reader may still be blocked on a read, so abort it.
    reader.abort();

    outcome.map(|_| ())
}

/// Drain incoming messages, logging each one, until the first read error or
/// a close frame from the peer. Fires `done_tx` on exit; the signal also
/// fires if this task is dropped before finishing.
pub async fn read_messages<R>(mut read: R, done_tx: oneshot::Sender<()>)
where
    R: Stream<Item = Result<Message, WsError>> + Unpin,
{
    while let Some(received) = read.next().await {
        match received {
            Ok(Message::Text(text)) => tracing::info!("recv: {text}"),
            Ok(Message::Binary(payload)) => tracing::info!("recv: {} bytes", payload.len()),
            Ok(Message::Close(Some(frame))) => {
                tracing::info!("peer closed the connection: {}", frame.code);
                break;
            }
            Ok(Message::Close(None)) => {
                tracing::info!("peer closed the connection");
                break;
            }
            Ok(_) => {}
            Err(error) => {
                tracing::error!("read: {error}");
                break;
            }
        }
    }

    let _ = done_tx.send(());
}

/// Multiplex the three session events until one of them ends the loop:
///
/// 1. the reader's done signal: terminate immediately;
/// 2. a heartbeat tick: send the current timestamp as text, terminate on
///    send failure;
/// 3. `interrupt` resolving: send a normal-closure close frame, then wait
///    for the done signal or the grace timeout, whichever comes first.
///
/// Exactly one event is handled per iteration.
pub async fn control_loop<W>(
    mut write: W,
    mut done_rx: oneshot::Receiver<()>,
    interrupt: impl Future<Output = ()>,
    heartbeat: Duration,
    grace: Duration,
) -> Result<CloseOutcome, ClientError>
where
    W: Sink<Message, Error = WsError> + Unpin,
{
    // First tick one full period from now; a slow iteration skips missed
    // ticks instead of bursting.
    let mut ticker = time::interval_at(time::Instant::now() + heartbeat, heartbeat);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            _ = &mut done_rx => {
                tracing::info!("reader finished");
                return Ok(CloseOutcome::ReaderDone);
            }
            _ = ticker.tick() => {
                let payload = timestamp_to_rfc3339(now_timestamp());
                tracing::info!("send: {payload}");
                if let Err(error) = write.send(Message::Text(payload.into())).await {
                    tracing::error!("write: {error}");
                    return Err(ClientError::Send(error));
                }
            }
            _ = &mut interrupt => {
                tracing::info!("interrupt");

                let close = Message::Close(Some(CloseFrame {
                    code: CloseCode::Normal,
                    reason: Utf8Bytes::default(),
                }));
                if let Err(error) = write.send(close).await {
                    tracing::error!("write close: {error}");
                    return Err(ClientError::Send(error));
                }

                // The reader sees the peer's close reply (or the connection
                // dropping) and fires the done signal.
                return match time::timeout(grace, &mut done_rx).await {
                    Ok(_) => {
                        tracing::info!("close acknowledged by peer");
                        Ok(CloseOutcome::Acknowledged)
                    }
                    Err(_) => {
                        tracing::warn!("timed out waiting for close acknowledgement");
                        Ok(CloseOutcome::TimedOut)
                    }
                };
            }
        }
    }
}
