use mistnet_core::NodeId;
use std::net::SocketAddr;
use thiserror::Error;

/// Errors raised while handling signaling traffic.
///
/// None of these ever reach a peer. The coordinator logs them and drops the
/// message that caused them.
#[derive(Error, Debug)]
pub enum SignalingError {
    #[error("Failed to decode signaling message: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode signaling message: {0}")]
    Encode(#[source] serde_json::Error),

    /// The connection behind a channel is gone.
    #[error("Channel closed")]
    ChannelClosed,

    /// The peer is not draining its outbound queue.
    #[error("Outbound queue full")]
    Backpressure,

    #[error("No channel bound for node {0:?}")]
    UnknownNode(NodeId),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to serialize default config: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
