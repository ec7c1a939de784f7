use crate::config::MistConfig;
use crate::error::ServerError;
use crate::signaling::{SignalingCoordinator, ws_handler};
use axum::Router;
use axum::routing::get;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

pub const SIGNALING_PATH: &str = "/signaling";

pub struct MistServer {
    config: MistConfig,
    coordinator: SignalingCoordinator,
}

impl MistServer {
    pub fn new(config: MistConfig) -> Self {
        Self::with_coordinator(config, SignalingCoordinator::new())
    }

    pub fn with_coordinator(config: MistConfig, coordinator: SignalingCoordinator) -> Self {
        Self {
            config,
            coordinator,
        }
    }

    pub fn coordinator(&self) -> &SignalingCoordinator {
        &self.coordinator
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route(SIGNALING_PATH, get(ws_handler))
            .with_state(self.coordinator.clone())
    }

    /// Bind the configured port and serve until Ctrl-C.
    ///
    /// Returns immediately when the node is disabled.
    pub async fn start(self) -> Result<(), ServerError> {
        if !self.config.global_node.enable {
            info!("Signaling server disabled in config, not starting");
            return Ok(());
        }

        let addr = self.config.listen_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local = listener.local_addr().map_err(ServerError::Serve)?;
        info!("Signaling server listening on ws://{}{}", local, SIGNALING_PATH);

        let app = self
            .router()
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ServerError::Serve)
    }
}

pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
