//! REST endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/reservations/latest` | Current latest reservation |
//! | `PUT` | `/api/reservations/latest` | Set the latest reservation's status |
//!
//! The `PUT` handler is the mutation gateway: it validates the
//! requested status (the typed extractor rejects anything outside the
//! closed enum before this code runs), applies it through the status
//! register, and announces the change to observers only when the update
//! actually took effect.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use tably_types::{Reservation, ReservationStatus};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `PUT /api/reservations/latest`.
#[derive(Debug, serde::Deserialize)]
pub struct UpdateStatusRequest {
    /// The requested status, one of the closed set.
    pub status: ReservationStatus,
}

/// Serve a minimal HTML page showing the current reservation and the
/// available endpoints.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let latest = state.register.latest().await;
    let observers = state.registry.len().await;

    let (status, created_at) = latest.map_or_else(
        || (String::from("none"), String::from("-")),
        |record| (format!("{:?}", record.status), record.created_at.to_rfc3339()),
    );

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Tably</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 640px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.25rem; font-weight: bold; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; color: #8b949e; }}
    </style>
</head>
<body>
    <h1>Tably</h1>
    <p>Live reservation status board</p>
    <div>
        <div class="metric">
            <div class="label">Status</div>
            <div class="value">{status}</div>
        </div>
        <div class="metric">
            <div class="label">Created</div>
            <div class="value">{created_at}</div>
        </div>
        <div class="metric">
            <div class="label">Observers</div>
            <div class="value">{observers}</div>
        </div>
    </div>
    <ul>
        <li>GET /api/reservations/latest</li>
        <li>PUT /api/reservations/latest</li>
        <li>WS  /ws/reservations</li>
    </ul>
</body>
</html>"#
    ))
}

/// `GET /api/reservations/latest` -- the current latest record.
pub async fn get_latest(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Reservation>, ApiError> {
    state
        .register
        .latest()
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(String::from("no reservation exists yet")))
}

/// `PUT /api/reservations/latest` -- set the latest record's status.
///
/// Announces the updated record to all observers when (and only when)
/// the update applied. An update that raced a rollover and lost yields
/// 404 and no announcement.
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Reservation>, ApiError> {
    let latest = state
        .register
        .latest()
        .await
        .ok_or_else(|| ApiError::NotFound(String::from("no reservation to update")))?;

    let updated = state
        .register
        .update_status(latest.id, request.status)
        .await
        .ok_or_else(|| {
            ApiError::NotFound(String::from("reservation was superseded; update had no effect"))
        })?;

    state.broadcaster.announce(&updated).await;

    Ok(Json(updated))
}
