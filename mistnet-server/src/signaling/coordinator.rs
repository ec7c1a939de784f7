use crate::error::SignalingError;
use crate::registry::{ChannelRegistry, NodeChannel, SessionIndex};
use crate::room::{PairingEngine, RoomTable};
use bytes::Bytes;
use mistnet_core::{SessionId, SignalingData};
use std::sync::Arc;
use tracing::{debug, info};

struct CoordinatorInner {
    sessions: SessionIndex,
    channels: Arc<ChannelRegistry>,
    rooms: RoomTable,
    pairing: PairingEngine,
}

// No lock spans two tables: a concurrent caller can see a node that is bound
// to a channel but not yet in a room.
#[derive(Clone)]
pub struct SignalingCoordinator {
    inner: Arc<CoordinatorInner>,
}

impl Default for SignalingCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalingCoordinator {
    pub fn new() -> Self {
        let channels = Arc::new(ChannelRegistry::new());

        Self {
            inner: Arc::new(CoordinatorInner {
                sessions: SessionIndex::new(),
                pairing: PairingEngine::new(Arc::clone(&channels)),
                channels,
                rooms: RoomTable::new(),
            }),
        }
    }

    pub fn sessions(&self) -> &SessionIndex {
        &self.inner.sessions
    }

    pub fn channels(&self) -> &ChannelRegistry {
        &self.inner.channels
    }

    pub fn rooms(&self) -> &RoomTable {
        &self.inner.rooms
    }

    pub async fn on_message(&self, session: &SessionId, channel: &Arc<NodeChannel>, raw: Bytes) {
        debug!("[RECV] {}: {}", session, String::from_utf8_lossy(&raw));

        let msg = match decode(&raw) {
            Ok(msg) => msg,
            Err(e) => {
                debug!("Dropping message on {}: {}", session, e);
                return;
            }
        };

        let inner = &self.inner;
        inner.sessions.bind_session(session, &msg.sender_id);
        if inner.channels.bind(&msg.sender_id, channel) {
            debug!("Bound channel of {} to node {:?}", session, msg.sender_id);
        }

        if msg.is_request() {
            let members = inner.rooms.join(&msg.room_id, &msg.sender_id).await;
            info!(
                "Node {:?} joined room {:?} ({} members)",
                msg.sender_id,
                msg.room_id,
                members.len()
            );
            if members.len() >= 2 {
                inner.pairing.introduce(&msg.room_id, &members).await;
            }
            return;
        }

        debug!("[RELAY] {:?} -> {:?}", msg.sender_id, msg.receiver_id);
        inner.channels.send(&msg.receiver_id, raw).await;
    }

    /// Tear down everything `session` left behind. Safe to call twice.
    pub async fn on_close(&self, session: &SessionId) {
        let inner = &self.inner;

        if let Some(node) = inner.sessions.resolve(session) {
            if let Some(room) = inner.rooms.leave(&node).await {
                info!("Node {:?} left room {:?}", node, room);
            }
            inner.channels.unbind(&node);
        }

        inner.sessions.unbind_session(session);
        debug!("Session {} closed", session);
    }
}

fn decode(raw: &[u8]) -> Result<SignalingData, SignalingError> {
    serde_json::from_slice(raw).map_err(SignalingError::Decode)
}
