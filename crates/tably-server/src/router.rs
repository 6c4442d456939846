//! Axum router construction.
//!
//! Assembles the REST routes and the `WebSocket` endpoint into a single
//! [`Router`] with CORS and request tracing enabled.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the complete Axum router.
///
/// - `GET /` -- minimal HTML status page
/// - `GET /ws/reservations` -- `WebSocket` reservation stream
/// - `GET /api/reservations/latest` -- current latest reservation
/// - `PUT /api/reservations/latest` -- set the latest reservation's status
///
/// CORS allows any origin for dashboard development; restrict in
/// production.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // WebSocket
        .route("/ws/reservations", get(ws::ws_reservations))
        // REST API
        .route(
            "/api/reservations/latest",
            get(handlers::get_latest).put(handlers::update_status),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
