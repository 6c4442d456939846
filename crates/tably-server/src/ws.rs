//! `WebSocket` handler for live reservation pushes.
//!
//! Clients connect to `GET /ws/reservations`, immediately receive the
//! current reservation (or the JSON literal `null` when none exists),
//! and then receive one JSON-encoded record per state change until they
//! disconnect.
//!
//! Each connection registers its own delivery channel with the
//! subscriber registry. The connection task is the only place that
//! touches the socket; announcements merely queue payloads, so a slow
//! client backs up its own queue and nobody else's.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use tracing::debug;

use crate::state::AppState;

/// Upgrade an HTTP request to a `WebSocket` connection and begin
/// streaming reservation updates.
///
/// # Route
///
/// `GET /ws/reservations`
pub async fn ws_reservations(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_ws(socket, state))
}

/// Handle the `WebSocket` lifecycle: register, catch up, forward queued
/// payloads, and unregister on the way out.
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    let (id, mut rx) = state.registry.register().await;
    debug!(subscription = %id, "WebSocket client connected");

    // Catch-up push: the new observer gets the current record right
    // away, closing the gap with any announcement it raced.
    state.broadcaster.catch_up(id).await;

    loop {
        tokio::select! {
            // A queued push payload from an announcement or catch-up.
            payload = rx.recv() => {
                match payload {
                    Some(json) => {
                        let msg = Message::Text(json.to_string().into());
                        if socket.send(msg).await.is_err() {
                            debug!(subscription = %id, "WebSocket client disconnected (send failed)");
                            break;
                        }
                    }
                    // Sender side gone: the registry removed this
                    // subscription after a failed delivery.
                    None => break,
                }
            }
            // Check if the client sent a close frame or disconnected.
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Close(_))) | None => {
                        debug!(subscription = %id, "WebSocket client disconnected");
                        break;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            debug!(subscription = %id, "WebSocket client disconnected (pong failed)");
                            break;
                        }
                    }
                    Some(Err(e)) => {
                        debug!(subscription = %id, "WebSocket error: {e}");
                        break;
                    }
                    _ => {
                        // Ignore text/binary frames from the client;
                        // the stream is push-only.
                    }
                }
            }
        }
    }

    state.registry.unregister(id).await;
}
