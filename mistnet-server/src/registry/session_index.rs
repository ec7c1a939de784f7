use dashmap::DashMap;
use mistnet_core::{NodeId, SessionId};

#[derive(Default)]
pub struct SessionIndex {
    sessions: DashMap<SessionId, NodeId>,
}

impl SessionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind_session(&self, session: &SessionId, node: &NodeId) -> Option<NodeId> {
        self.sessions.insert(session.clone(), node.clone())
    }

    pub fn resolve(&self, session: &SessionId) -> Option<NodeId> {
        self.sessions.get(session).map(|entry| entry.value().clone())
    }

    pub fn unbind_session(&self, session: &SessionId) -> Option<NodeId> {
        self.sessions.remove(session).map(|(_, node)| node)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
