//! The subscriber registry: membership and fan-out for live observers.
//!
//! Each connected observer owns the receiving half of an unbounded
//! channel; the registry keeps the sending halves keyed by
//! [`SubscriptionId`]. Fan-out is a synchronous `unbounded_send` per
//! subscriber, so the announcing caller never waits on a slow socket --
//! the per-connection `WebSocket` task drains the queue at its own
//! pace.
//!
//! A send fails only when the receiving task has dropped its half
//! (disconnect or crash). That subscription is removed on the spot;
//! delivery to the remaining subscribers is unaffected.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use tably_types::SubscriptionId;

/// One pre-serialized push message, shared across all deliveries of a
/// single announcement.
pub type PushPayload = Arc<str>;

/// Tracks the set of currently-connected observers and their delivery
/// channels.
#[derive(Debug, Default)]
pub struct SubscriberRegistry {
    subscribers: RwLock<HashMap<SubscriptionId, UnboundedSender<PushPayload>>>,
}

impl SubscriberRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new observer.
    ///
    /// Returns the subscription handle and the receiving half of its
    /// delivery channel. Messages arrive on the receiver in the order
    /// they were pushed (FIFO per subscriber).
    pub async fn register(&self) -> (SubscriptionId, UnboundedReceiver<PushPayload>) {
        let id = SubscriptionId::new();
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.write().await.insert(id, tx);
        debug!(subscription = %id, "observer registered");
        (id, rx)
    }

    /// Remove an observer. Idempotent: unknown or already-removed IDs
    /// are a no-op.
    pub async fn unregister(&self, id: SubscriptionId) {
        if self.subscribers.write().await.remove(&id).is_some() {
            debug!(subscription = %id, "observer unregistered");
        }
    }

    /// Number of currently registered observers.
    pub async fn len(&self) -> usize {
        self.subscribers.read().await.len()
    }

    /// Whether no observers are currently registered.
    pub async fn is_empty(&self) -> bool {
        self.subscribers.read().await.is_empty()
    }

    /// Deliver `payload` to every active subscription.
    ///
    /// Each delivery attempt is isolated: a failed send removes that
    /// subscription and never aborts delivery to the others. Returns
    /// the number of successful deliveries.
    pub async fn broadcast(&self, payload: PushPayload) -> usize {
        let mut delivered = 0usize;
        let mut failed = Vec::new();

        {
            let subscribers = self.subscribers.read().await;
            for (id, tx) in subscribers.iter() {
                if tx.send(Arc::clone(&payload)).is_ok() {
                    delivered += 1;
                } else {
                    failed.push(*id);
                }
            }
        }

        if !failed.is_empty() {
            let mut subscribers = self.subscribers.write().await;
            for id in failed {
                subscribers.remove(&id);
                debug!(subscription = %id, "removed dead subscription during broadcast");
            }
        }

        delivered
    }

    /// Deliver `payload` to a single subscription (the join-time
    /// catch-up push). Returns `false` and removes the subscription if
    /// the channel is gone.
    pub async fn send_to(&self, id: SubscriptionId, payload: PushPayload) -> bool {
        let sent = {
            let subscribers = self.subscribers.read().await;
            match subscribers.get(&id) {
                Some(tx) => tx.send(payload).is_ok(),
                None => return false,
            }
        };

        if !sent {
            self.unregister(id).await;
            debug!(subscription = %id, "removed dead subscription during direct send");
        }
        sent
    }
}
