//! Signaling relay for mistnet peers.
//!
//! Peers connect over a WebSocket, announce themselves in a room with a
//! `Request` message and get told which existing members to connect to.
//! Any other message is forwarded untouched to the node named in
//! `ReceiverId`.

pub mod config;
pub mod error;
mod registry;
mod room;
mod server;
mod signaling;
mod transport;

pub use config::MistConfig;
pub use error::{ConfigError, ServerError, SignalingError};
pub use registry::*;
pub use room::*;
pub use server::*;
pub use signaling::*;
pub use transport::*;
