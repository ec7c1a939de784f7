use mistnet_core::{NodeId, RoomId};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Default)]
struct Rooms {
    members: HashMap<RoomId, Vec<NodeId>>,
    node_to_room: HashMap<NodeId, RoomId>,
}

/// Room membership in join order, plus each node's current room.
#[derive(Default)]
pub struct RoomTable {
    inner: Mutex<Rooms>,
}

impl RoomTable {
    pub fn new() -> Self {
        Self::default()
    }

    // The node stays listed in any previous room until it disconnects.
    pub async fn join(&self, room: &RoomId, node: &NodeId) -> Vec<NodeId> {
        let mut rooms = self.inner.lock().await;

        let members = rooms.members.entry(room.clone()).or_default();
        if !members.contains(node) {
            members.push(node.clone());
        }
        let snapshot = members.clone();

        rooms.node_to_room.insert(node.clone(), room.clone());
        snapshot
    }

    pub async fn leave(&self, node: &NodeId) -> Option<RoomId> {
        let mut rooms = self.inner.lock().await;

        let room = rooms.node_to_room.remove(node)?;
        if let Some(members) = rooms.members.get_mut(&room) {
            if let Some(pos) = members.iter().position(|m| m == node) {
                members.remove(pos);
            }
            if members.is_empty() {
                rooms.members.remove(&room);
                debug!("Room {:?} is empty, removed", room);
            }
        }

        debug!(
            "Node {:?} left room {:?}, remaining: {:?}",
            node,
            room,
            rooms.members.get(&room)
        );
        Some(room)
    }

    pub async fn room_of(&self, node: &NodeId) -> Option<RoomId> {
        self.inner.lock().await.node_to_room.get(node).cloned()
    }

    pub async fn members(&self, room: &RoomId) -> Vec<NodeId> {
        self.inner
            .lock()
            .await
            .members
            .get(room)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn room_count(&self) -> usize {
        self.inner.lock().await.members.len()
    }
}
