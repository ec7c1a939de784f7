use crate::error::SignalingError;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Outbound write primitive for one connection. Must not wait on the peer.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn write(&mut self, payload: Bytes) -> Result<(), SignalingError>;
}

pub struct NodeChannel {
    sink: Mutex<Box<dyn MessageSink>>,
}

impl NodeChannel {
    pub fn new<S>(sink: S) -> Arc<Self>
    where
        S: MessageSink + 'static,
    {
        Arc::new(Self {
            sink: Mutex::new(Box::new(sink)),
        })
    }

    pub async fn write(&self, payload: Bytes) -> Result<(), SignalingError> {
        self.sink.lock().await.write(payload).await
    }
}

impl std::fmt::Debug for NodeChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeChannel").finish_non_exhaustive()
    }
}
