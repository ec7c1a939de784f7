use crate::model::node::NodeId;
use crate::model::room::RoomId;
use serde::{Deserialize, Deserializer, Serialize};

/// `Type` field of a signaling message.
///
/// Only `"Request"` carries meaning for the relay. Any other string, `null`
/// and an absent field all mark an opaque payload to be forwarded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SignalingType {
    Request,
    #[default]
    Relay,
}

impl<'de> Deserialize<'de> for SignalingType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)?.as_deref() {
            Some("Request") => Ok(Self::Request),
            _ => Ok(Self::Relay),
        }
    }
}

/// The wire unit exchanged with peers.
///
/// Decoding is lenient: a missing or `null` field takes its default, so a
/// message without `SenderId` is attributed to the empty node id. A field of
/// the wrong JSON type still fails.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SignalingData {
    #[serde(rename = "Type")]
    pub kind: SignalingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sender_id: NodeId,
    #[serde(deserialize_with = "null_as_default")]
    pub receiver_id: NodeId,
    #[serde(deserialize_with = "null_as_default")]
    pub room_id: RoomId,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl SignalingData {
    /// Request announcing `sender` to `receiver` inside `room`.
    pub fn introduction(receiver: NodeId, sender: NodeId, room: RoomId) -> Self {
        Self {
            kind: SignalingType::Request,
            data: None,
            sender_id: sender,
            receiver_id: receiver,
            room_id: room,
        }
    }

    pub fn is_request(&self) -> bool {
        self.kind == SignalingType::Request
    }
}
