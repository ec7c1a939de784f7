mod channel_registry;
mod message_sink;
mod session_index;

pub use channel_registry::*;
pub use message_sink::{MessageSink, NodeChannel};
pub use session_index::*;

#[cfg(test)]
pub(crate) use message_sink::testing;
