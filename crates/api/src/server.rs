//! Server configuration and startup.

use crate::routes;
use crate::state::AppState;
use std::net::SocketAddr;
use tracing::info;

/// Network configuration of the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8787)),
        }
    }
}

/// Binds and serves the API until the task is stopped.
pub async fn serve(config: ServerConfig, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(bind = %config.bind, "dashboard API listening");
    axum::serve(listener, routes::router(state)).await
}
