use crate::error::SignalingError;
use crate::registry::MessageSink;
use async_trait::async_trait;
use axum::extract::ws::Message;
use bytes::Bytes;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Frames a connection may have queued before further writes are refused.
pub const OUTBOUND_QUEUE_CAPACITY: usize = 256;

/// Feeds a WebSocket's write task.
///
/// A write never waits on the peer: it fails when the queue is full or the
/// write task has gone away.
pub struct WsSink {
    tx: mpsc::Sender<Message>,
}

impl WsSink {
    pub fn new(tx: mpsc::Sender<Message>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl MessageSink for WsSink {
    async fn write(&mut self, payload: Bytes) -> Result<(), SignalingError> {
        self.tx.try_send(to_frame(payload)).map_err(|e| match e {
            TrySendError::Full(_) => SignalingError::Backpressure,
            TrySendError::Closed(_) => SignalingError::ChannelClosed,
        })
    }
}

/// Text frame when the payload is UTF-8, binary otherwise.
pub(crate) fn to_frame(payload: Bytes) -> Message {
    match String::from_utf8(payload.to_vec()) {
        Ok(text) => Message::Text(text.into()),
        Err(_) => Message::Binary(payload),
    }
}
