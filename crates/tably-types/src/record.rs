//! The reservation record pushed to observers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::ReservationId;
use crate::status::ReservationStatus;

/// One reservation record.
///
/// `id` and `created_at` are assigned at creation and never change;
/// only `status` is mutable, and only through the status register's
/// explicit update operation. The record with the maximum `created_at`
/// is "the latest" -- the sole subject of reads, mutations, and pushes.
///
/// Serialized in camelCase to match the dashboard's expectations:
/// `{"id": "...", "createdAt": "...", "status": "pending"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Reservation {
    /// Unique identifier, assigned at creation.
    pub id: ReservationId,
    /// Creation timestamp; determines which record is the latest.
    pub created_at: DateTime<Utc>,
    /// Current lifecycle status.
    pub status: ReservationStatus,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn wire_shape_is_camel_case() {
        let reservation = Reservation {
            id: ReservationId::new(),
            created_at: Utc::now(),
            status: ReservationStatus::Confirmed,
        };

        let json: serde_json::Value = serde_json::to_value(&reservation).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["status"], "confirmed");
    }

    #[test]
    fn duplicate_delivery_decodes_to_identical_record() {
        // An observer may receive the same record twice (join racing an
        // announcement); both copies must decode to the same state.
        let reservation = Reservation {
            id: ReservationId::new(),
            created_at: Utc::now(),
            status: ReservationStatus::Pending,
        };

        let payload = serde_json::to_string(&reservation).unwrap();
        let first: Reservation = serde_json::from_str(&payload).unwrap();
        let second: Reservation = serde_json::from_str(&payload).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, reservation);
    }

    #[test]
    fn absent_record_serializes_as_null() {
        let none: Option<Reservation> = None;
        assert_eq!(serde_json::to_string(&none).unwrap(), "null");
    }
}
