//! HTTP + `WebSocket` server for the tably reservation board.
//!
//! This crate provides an Axum server that exposes:
//!
//! - **`WebSocket` endpoint** (`/ws/reservations`) pushing the current
//!   reservation to every connected observer on each state change, with
//!   an immediate catch-up push on connect
//! - **REST endpoints** for reading and mutating the latest reservation
//! - **Minimal HTML status page** (`GET /`)
//!
//! # Architecture
//!
//! The [`SubscriberRegistry`] owns one unbounded channel per connected
//! observer. The [`Broadcaster`] mediates between the status register
//! and the registry: it serializes a record once and fans the payload
//! out to every active subscription without awaiting any individual
//! socket write. A failed delivery removes that one subscription and
//! never disturbs the rest; a disconnected observer re-joins and is
//! caught up on connect.
//!
//! [`SubscriberRegistry`]: registry::SubscriberRegistry
//! [`Broadcaster`]: broadcast::Broadcaster

pub mod broadcast;
pub mod error;
pub mod handlers;
pub mod registry;
pub mod router;
pub mod server;
pub mod startup;
pub mod state;
pub mod ws;

// Re-export primary types for convenience.
pub use broadcast::Broadcaster;
pub use registry::{PushPayload, SubscriberRegistry};
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use startup::spawn_server;
pub use state::AppState;
