//! Server startup helper for embedding in the daemon.
//!
//! Provides [`spawn_server`] which launches the HTTP + `WebSocket`
//! server on a background Tokio task, so it runs concurrently with the
//! daemon's rollover scheduler loop.

use std::sync::Arc;

use tokio::task::JoinHandle;

use tably_core::HttpConfig;

use crate::server::{ServerError, start_server};
use crate::state::AppState;

/// Errors that can occur when spawning the server.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The server failed to bind or start.
    #[error("server start error: {0}")]
    Server(#[from] ServerError),
}

/// Spawn the HTTP server on a background Tokio task.
///
/// Returns a [`JoinHandle`] so the caller can manage the server's
/// lifecycle alongside the scheduler loop. The address is validated
/// eagerly; the actual bind happens inside the spawned task.
///
/// # Errors
///
/// Returns [`StartupError::Server`] if the configured address does not
/// parse.
pub fn spawn_server(
    config: &HttpConfig,
    state: Arc<AppState>,
) -> Result<JoinHandle<()>, StartupError> {
    let addr_str = format!("{}:{}", config.host, config.port);
    let _: std::net::SocketAddr = addr_str.parse().map_err(|e| {
        StartupError::Server(ServerError::Bind(format!("invalid address {addr_str}: {e}")))
    })?;

    let config = config.clone();
    let handle = tokio::spawn(async move {
        if let Err(e) = start_server(&config, state).await {
            tracing::error!(error = %e, "server exited with error");
        }
    });

    tracing::info!(addr = %addr_str, "server spawned on background task");

    Ok(handle)
}
