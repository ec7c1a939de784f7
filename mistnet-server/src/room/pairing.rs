use crate::error::SignalingError;
use crate::registry::ChannelRegistry;
use bytes::Bytes;
use mistnet_core::{NodeId, RoomId, SignalingData};
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub first: NodeId,
    pub second: NodeId,
}

impl Pairing {
    pub fn new(first: NodeId, second: NodeId) -> Self {
        Self { first, second }
    }
}

/// The newest member meets the two members that joined right before it,
/// so a room forms a chain rather than a full mesh.
pub fn plan(members: &[NodeId]) -> Vec<Pairing> {
    match members {
        [first, second] => vec![Pairing::new(first.clone(), second.clone())],
        [.., prev2, prev1, newest] => vec![
            Pairing::new(prev2.clone(), newest.clone()),
            Pairing::new(prev1.clone(), newest.clone()),
        ],
        _ => Vec::new(),
    }
}

pub struct PairingEngine {
    channels: Arc<ChannelRegistry>,
}

impl PairingEngine {
    pub fn new(channels: Arc<ChannelRegistry>) -> Self {
        Self { channels }
    }

    /// Returns how many introductions were delivered.
    pub async fn introduce(&self, room: &RoomId, members: &[NodeId]) -> usize {
        let mut delivered = 0;
        for pairing in plan(members) {
            debug!(
                "Pairing {:?} <-> {:?} in room {:?}",
                pairing.first, pairing.second, room
            );
            delivered += self.send_pair(&pairing, room).await;
        }
        delivered
    }

    async fn send_pair(&self, pairing: &Pairing, room: &RoomId) -> usize {
        let to_first =
            SignalingData::introduction(pairing.first.clone(), pairing.second.clone(), room.clone());
        let to_second =
            SignalingData::introduction(pairing.second.clone(), pairing.first.clone(), room.clone());

        let mut delivered = 0;
        for msg in [to_first, to_second] {
            match encode(&msg) {
                Ok(payload) => {
                    if self.channels.send(&msg.receiver_id, payload).await {
                        delivered += 1;
                    }
                }
                Err(e) => error!("Introduction for {:?} not sent: {}", msg.receiver_id, e),
            }
        }
        delivered
    }
}

fn encode(msg: &SignalingData) -> Result<Bytes, SignalingError> {
    serde_json::to_vec(msg)
        .map(Bytes::from)
        .map_err(SignalingError::Encode)
}
