use mistnet_core::{NodeId, RoomId};

use crate::integration::init_tracing;
use crate::utils::{SIGNAL_TIMEOUT_MS, TestClient, spawn_server, wait_until};

#[tokio::test]
async fn test_disconnect_clears_membership() {
    init_tracing();
    let server = spawn_server().await.expect("Failed to start server");
    let coordinator = server.coordinator.clone();

    let mut a = TestClient::connect(server.addr).await.expect("A connect");
    let mut b = TestClient::connect(server.addr).await.expect("B connect");
    a.request("A", "r1").await.expect("A request");
    b.request("B", "r1").await.expect("B request");
    a.recv_signal(SIGNAL_TIMEOUT_MS).await.expect("A intro");
    b.recv_signal(SIGNAL_TIMEOUT_MS).await.expect("B intro");

    a.close().await.expect("close A");

    let room = RoomId::from("r1");
    let cleared = wait_until(SIGNAL_TIMEOUT_MS, || {
        let coordinator = coordinator.clone();
        let room = room.clone();
        async move { coordinator.rooms().members(&room).await == vec![NodeId::from("B")] }
    })
    .await;
    assert!(cleared, "A still listed in r1");
    assert!(!coordinator.channels().is_bound(&NodeId::from("A")));
    assert_eq!(coordinator.sessions().len(), 1);

    b.close().await.expect("close B");
    let empty = wait_until(SIGNAL_TIMEOUT_MS, || {
        let coordinator = coordinator.clone();
        async move { coordinator.rooms().room_count().await == 0 && coordinator.sessions().is_empty() }
    })
    .await;
    assert!(empty, "tables not empty after every client left");
}
