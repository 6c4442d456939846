//! The closed reservation status enumeration.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lifecycle status of a reservation.
///
/// The set is closed: a mutation request carrying any other value is
/// rejected at deserialization and never reaches the status register.
/// Serialized in lowercase on the wire (`"pending"`, `"confirmed"`,
/// `"cancelled"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ReservationStatus {
    /// Freshly created, awaiting a decision. The initial status of
    /// every new record.
    #[default]
    Pending,
    /// The reservation has been confirmed.
    Confirmed,
    /// The reservation has been cancelled.
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&ReservationStatus::Pending).unwrap_or_default();
        assert_eq!(json, "\"pending\"");
    }

    #[test]
    fn rejects_values_outside_the_closed_set() {
        let parsed: Result<ReservationStatus, _> = serde_json::from_str("\"arrived\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn default_is_pending() {
        assert_eq!(ReservationStatus::default(), ReservationStatus::Pending);
    }
}
