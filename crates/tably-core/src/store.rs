//! Record store seam and its in-memory implementation.
//!
//! The store is the durable-collaborator boundary: it knows how to
//! create a record, read the latest one, and update a record by ID.
//! It deliberately does *not* know that only the latest record may be
//! mutated -- that guard belongs to the
//! [`StatusRegister`](crate::register::StatusRegister), which owns the
//! store behind its mutation lock.

use chrono::Utc;
use tably_types::{Reservation, ReservationId, ReservationStatus};

/// Storage operations the status register needs from a record backend.
///
/// Implementations do not need to be internally synchronized; the
/// register serializes every call behind a single lock.
pub trait RecordStore: Send {
    /// Create a record with the given status and the current timestamp.
    /// The new record becomes the latest.
    fn create(&mut self, status: ReservationStatus) -> Reservation;

    /// Return the most recently created record, or `None` if the store
    /// is empty.
    fn read_latest(&self) -> Option<Reservation>;

    /// Set the status of the record with the given ID, returning the
    /// updated record, or `None` if no such record exists.
    fn update_status(
        &mut self,
        id: ReservationId,
        status: ReservationStatus,
    ) -> Option<Reservation>;
}

/// Append-only in-memory record store.
///
/// Records are never deleted; history accumulates for the lifetime of
/// the process. The latest record is the one with the maximum
/// `created_at`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<Reservation>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of records accumulated so far (including superseded ones).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for InMemoryStore {
    fn create(&mut self, status: ReservationStatus) -> Reservation {
        let record = Reservation {
            id: ReservationId::new(),
            created_at: Utc::now(),
            status,
        };
        self.records.push(record.clone());
        record
    }

    fn read_latest(&self) -> Option<Reservation> {
        self.records
            .iter()
            .max_by_key(|record| record.created_at)
            .cloned()
    }

    fn update_status(
        &mut self,
        id: ReservationId,
        status: ReservationStatus,
    ) -> Option<Reservation> {
        let record = self.records.iter_mut().find(|record| record.id == id)?;
        record.status = status;
        Some(record.clone())
    }
}
