//! Shared application state for the server.
//!
//! [`AppState`] wires the status register, the subscriber registry, and
//! the broadcaster together and is injected into every handler via
//! Axum's `State` extractor. The register and registry never reference
//! each other; the broadcaster mediates.

use std::sync::Arc;

use tably_core::StatusRegister;

use crate::broadcast::Broadcaster;
use crate::registry::SubscriberRegistry;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and cloned into each handler. The same state is
/// handed to the daemon's rollover scheduler so a timer-driven change
/// announces exactly like a manual one.
#[derive(Clone)]
pub struct AppState {
    /// Authority over the current reservation record.
    pub register: Arc<StatusRegister>,
    /// Membership of currently-connected observers.
    pub registry: Arc<SubscriberRegistry>,
    /// Fan-out of state changes and join-time catch-up pushes.
    pub broadcaster: Broadcaster,
}

impl AppState {
    /// Create application state around an existing status register.
    pub fn new(register: Arc<StatusRegister>) -> Self {
        let registry = Arc::new(SubscriberRegistry::new());
        let broadcaster = Broadcaster::new(Arc::clone(&register), Arc::clone(&registry));
        Self {
            register,
            registry,
            broadcaster,
        }
    }
}

impl core::fmt::Debug for AppState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
