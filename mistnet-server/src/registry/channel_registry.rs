use crate::error::SignalingError;
use crate::registry::NodeChannel;
use bytes::Bytes;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use mistnet_core::NodeId;
use std::sync::Arc;
use tracing::debug;

#[derive(Default)]
pub struct ChannelRegistry {
    channels: DashMap<NodeId, Arc<NodeChannel>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // First binding wins, even over a dead connection, until `unbind`.
    pub fn bind(&self, node: &NodeId, channel: &Arc<NodeChannel>) -> bool {
        match self.channels.entry(node.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Arc::clone(channel));
                true
            }
        }
    }

    pub async fn send(&self, node: &NodeId, payload: Bytes) -> bool {
        match self.try_send(node, payload).await {
            Ok(()) => true,
            Err(e) => {
                debug!("Dropping message for {:?}: {}", node, e);
                false
            }
        }
    }

    pub async fn try_send(&self, node: &NodeId, payload: Bytes) -> Result<(), SignalingError> {
        let channel = self
            .channels
            .get(node)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| SignalingError::UnknownNode(node.clone()))?;

        channel.write(payload).await
    }

    pub fn unbind(&self, node: &NodeId) -> bool {
        self.channels.remove(node).is_some()
    }

    pub fn is_bound(&self, node: &NodeId) -> bool {
        self.channels.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
