use mistnet_core::{NodeId, RoomId};
use std::collections::HashSet;
use std::sync::Arc;

use crate::integration::create_test_coordinator;
use crate::utils::{MockPeer, request_message};

const PEERS: usize = 50;

fn spawn_request(
    coordinator: &mistnet_server::SignalingCoordinator,
    peer: &MockPeer,
    room: &'static str,
) -> tokio::task::JoinHandle<()> {
    let coordinator = coordinator.clone();
    let session = peer.session.clone();
    let channel = Arc::clone(&peer.channel);
    let raw = request_message(peer.node.as_str(), room);

    tokio::spawn(async move { coordinator.on_message(&session, &channel, raw).await })
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_join_exactly_once() {
    let coordinator = create_test_coordinator();
    let peers: Vec<MockPeer> = (0..PEERS)
        .map(|i| MockPeer::new(&format!("node-{i}")))
        .collect();

    let handles: Vec<_> = peers
        .iter()
        .map(|peer| spawn_request(&coordinator, peer, "r1"))
        .collect();
    for handle in handles {
        handle.await.expect("join task panicked");
    }

    let members = coordinator.rooms().members(&RoomId::from("r1")).await;
    assert_eq!(members.len(), PEERS);

    let unique: HashSet<&NodeId> = members.iter().collect();
    assert_eq!(unique.len(), PEERS, "no duplicates");
    for peer in &peers {
        assert!(unique.contains(&peer.node), "lost join for {:?}", peer.node);
    }
    assert_eq!(coordinator.channels().len(), PEERS);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_close_and_join_stay_consistent() {
    let coordinator = create_test_coordinator();
    let peers: Vec<MockPeer> = (0..PEERS)
        .map(|i| MockPeer::new(&format!("node-{i}")))
        .collect();
    for peer in &peers {
        peer.request(&coordinator, "r1").await;
    }

    // Close the even half while the odd half sends another Request.
    let handles: Vec<_> = peers
        .iter()
        .enumerate()
        .map(|(i, peer)| {
            if i % 2 == 0 {
                let coordinator = coordinator.clone();
                let session = peer.session.clone();
                tokio::spawn(async move { coordinator.on_close(&session).await })
            } else {
                spawn_request(&coordinator, peer, "r1")
            }
        })
        .collect();
    for handle in handles {
        handle.await.expect("task panicked");
    }

    let members = coordinator.rooms().members(&RoomId::from("r1")).await;
    let expected: HashSet<NodeId> = (0..PEERS)
        .filter(|i| i % 2 == 1)
        .map(|i| NodeId(format!("node-{i}")))
        .collect();
    assert_eq!(members.iter().cloned().collect::<HashSet<_>>(), expected);
    assert_eq!(members.len(), expected.len());
    assert_eq!(coordinator.channels().len(), expected.len());
}
