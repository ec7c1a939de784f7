use crate::registry::NodeChannel;
use crate::signaling::SignalingCoordinator;
use crate::transport::{OUTBOUND_QUEUE_CAPACITY, WsSink};
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{ConnectInfo, State, WebSocketUpgrade};
use axum::response::IntoResponse;
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use mistnet_core::SessionId;
use std::net::SocketAddr;
use tokio::sync::mpsc;
use tokio::task::JoinError;
use tracing::{error, info};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(coordinator): State<SignalingCoordinator>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, addr, coordinator))
}

async fn handle_socket(socket: WebSocket, addr: SocketAddr, coordinator: SignalingCoordinator) {
    let session = SessionId::new();
    info!("New WebSocket connection {} from {}", session, addr);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel(OUTBOUND_QUEUE_CAPACITY);
    let channel = NodeChannel::new(WsSink::new(tx));

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let coordinator = coordinator.clone();
        let session = session.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                let payload = match msg {
                    Message::Text(text) => Bytes::copy_from_slice(text.as_str().as_bytes()),
                    Message::Binary(data) => data,
                    Message::Close(_) => break,
                    _ => continue,
                };
                coordinator.on_message(&session, &channel, payload).await;
            }
        }
    });

    tokio::select! {
        res = (&mut send_task) => {
            recv_task.abort();
            report_fault(&session, "send", res);
        }
        res = (&mut recv_task) => {
            send_task.abort();
            report_fault(&session, "receive", res);
        }
    };

    // Runs even when the receive loop panicked.
    coordinator.on_close(&session).await;
    info!("WebSocket disconnected: {} ({})", session, addr);
}

fn report_fault(session: &SessionId, side: &str, res: Result<(), JoinError>) {
    let Err(e) = res else {
        return;
    };
    if !e.is_panic() {
        return;
    }

    let panic = e.into_panic();
    let msg = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    error!("PANIC in {} task of {}: {}", side, session, msg);
}
