mod node;
mod room;
mod session;
mod signaling;

pub use node::NodeId;
pub use room::RoomId;
pub use session::SessionId;
pub use signaling::{SignalingData, SignalingType};
