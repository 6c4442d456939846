//! The broadcast core: fan-out of state changes and join-time catch-up.
//!
//! The broadcaster mediates between the status register (what the
//! current record is) and the subscriber registry (who is listening).
//! It holds no state of its own beyond the two `Arc`s.
//!
//! Guarantees:
//!
//! - [`announce`](Broadcaster::announce) serializes the record once and
//!   delivers the payload to every subscription active when it starts.
//!   Observers joining mid-announce may miss that payload; the catch-up
//!   push on join compensates, so an observer may see the same record
//!   twice. Consumers treat identical duplicates as idempotent.
//! - No individual socket write is awaited on the announcing path.

use std::sync::Arc;

use tracing::{debug, warn};

use tably_core::StatusRegister;
use tably_types::{Reservation, SubscriptionId};

use crate::registry::{PushPayload, SubscriberRegistry};

/// Pushes reservation state to connected observers.
#[derive(Clone)]
pub struct Broadcaster {
    register: Arc<StatusRegister>,
    registry: Arc<SubscriberRegistry>,
}

impl Broadcaster {
    /// Create a broadcaster over the given register and registry.
    pub const fn new(register: Arc<StatusRegister>, registry: Arc<SubscriberRegistry>) -> Self {
        Self { register, registry }
    }

    /// The subscriber registry this broadcaster fans out through.
    pub fn registry(&self) -> &Arc<SubscriberRegistry> {
        &self.registry
    }

    /// The status register this broadcaster reads catch-up state from.
    pub fn register(&self) -> &Arc<StatusRegister> {
        &self.register
    }

    /// Push `record` to every currently connected observer.
    ///
    /// Returns the number of observers the payload was handed to. Zero
    /// observers is not an error.
    pub async fn announce(&self, record: &Reservation) -> usize {
        let Some(payload) = encode(&Some(record.clone())) else {
            return 0;
        };

        let delivered = self.registry.broadcast(payload).await;
        debug!(id = %record.id, status = ?record.status, delivered, "announced reservation");
        delivered
    }

    /// Push the current latest record (or the `null` absent indicator)
    /// to one newly joined observer.
    pub async fn catch_up(&self, id: SubscriptionId) {
        let latest = self.register.latest().await;
        let Some(payload) = encode(&latest) else {
            return;
        };

        if self.registry.send_to(id, payload).await {
            debug!(subscription = %id, absent = latest.is_none(), "catch-up push delivered");
        }
    }
}

impl core::fmt::Debug for Broadcaster {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Broadcaster").finish_non_exhaustive()
    }
}

/// Serialize a push message: the record as a JSON object, or the JSON
/// literal `null` when no record exists.
fn encode(record: &Option<Reservation>) -> Option<PushPayload> {
    match serde_json::to_string(record) {
        Ok(json) => Some(PushPayload::from(json)),
        Err(e) => {
            // A Reservation always serializes; keep the failure local
            // to this push rather than surfacing it to the caller.
            warn!("failed to serialize push message: {e}");
            None
        }
    }
}
