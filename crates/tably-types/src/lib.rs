//! Shared type definitions for the tably reservation board.
//!
//! This crate is the single source of truth for the types that cross
//! crate boundaries in the tably workspace. Types defined here flow
//! downstream to `TypeScript` via `ts-rs` for the dashboard frontend.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for entity identifiers
//! - [`status`] -- The closed reservation status enumeration
//! - [`record`] -- The reservation record pushed to observers

pub mod ids;
pub mod record;
pub mod status;

// Re-export all public types at crate root for convenience.
pub use ids::{ReservationId, SubscriptionId};
pub use record::Reservation;
pub use status::ReservationStatus;
