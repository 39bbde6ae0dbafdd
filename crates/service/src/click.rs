//! Bounded click delivery from the protocol surface to the owning process.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::warn;

/// A click notification for one menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// Reader-supplied event timestamp.
    pub timestamp: u32,
}

/// Outcome of a single click handoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Queued for the owning process.
    Delivered,
    /// No sink registered for the id; logged and dropped.
    UnknownId,
    /// Sink queue full or consumer gone; logged and dropped.
    Dropped,
}

/// Registry of per-item click sinks.
///
/// The owning layer registers a sink for each interactive item and drains
/// the receiver at its own pace. Handoff is `try_send` on a bounded queue,
/// so a slow or unresponsive consumer never blocks protocol dispatch; the
/// overflow policy is drop-newest with a warn log.
#[derive(Debug)]
pub struct ClickRouter {
    capacity: usize,
    sinks: RwLock<HashMap<i32, mpsc::Sender<ClickEvent>>>,
}

impl ClickRouter {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            sinks: RwLock::new(HashMap::new()),
        }
    }

    fn sinks(&self) -> std::sync::RwLockReadGuard<'_, HashMap<i32, mpsc::Sender<ClickEvent>>> {
        self.sinks.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a click sink for `id`, returning the consumer side.
    ///
    /// A previous sink for the same id is replaced (its receiver closes).
    pub fn register(&self, id: i32) -> mpsc::Receiver<ClickEvent> {
        let (tx, rx) = mpsc::channel(self.capacity);
        self.sinks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, tx);
        rx
    }

    /// Removes the sink for `id`, if any.
    pub fn unregister(&self, id: i32) {
        self.sinks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
    }

    /// Hands a click for `id` to its registered sink without blocking.
    pub fn deliver(&self, id: i32, timestamp: u32) -> Delivery {
        let sinks = self.sinks();
        let Some(tx) = sinks.get(&id) else {
            warn!(id, "failed to look up clicked menu item");
            return Delivery::UnknownId;
        };

        match tx.try_send(ClickEvent { timestamp }) {
            Ok(()) => Delivery::Delivered,
            Err(TrySendError::Full(_)) => {
                warn!(id, "click queue full, dropping event");
                Delivery::Dropped
            }
            Err(TrySendError::Closed(_)) => {
                warn!(id, "click consumer gone, dropping event");
                Delivery::Dropped
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn deliver_reaches_registered_sink() {
        let router = ClickRouter::new(4);
        let mut rx = router.register(2);

        assert_eq!(router.deliver(2, 123), Delivery::Delivered);
        let event = rx.recv().await.unwrap();
        assert_eq!(event.timestamp, 123);
    }

    #[tokio::test]
    async fn deliver_unknown_id_is_dropped() {
        let router = ClickRouter::new(4);
        assert_eq!(router.deliver(99, 0), Delivery::UnknownId);
    }

    #[tokio::test]
    async fn full_queue_drops_without_blocking() {
        let router = ClickRouter::new(2);
        let mut rx = router.register(1);

        assert_eq!(router.deliver(1, 1), Delivery::Delivered);
        assert_eq!(router.deliver(1, 2), Delivery::Delivered);
        // Queue is full; the third click is dropped, not blocked on.
        assert_eq!(router.deliver(1, 3), Delivery::Dropped);

        assert_eq!(rx.recv().await.unwrap().timestamp, 1);
        assert_eq!(rx.recv().await.unwrap().timestamp, 2);
    }

    #[tokio::test]
    async fn closed_consumer_drops() {
        let router = ClickRouter::new(2);
        let rx = router.register(1);
        drop(rx);
        assert_eq!(router.deliver(1, 0), Delivery::Dropped);
    }

    #[tokio::test]
    async fn unregister_removes_sink() {
        let router = ClickRouter::new(2);
        let _rx = router.register(1);
        router.unregister(1);
        assert_eq!(router.deliver(1, 0), Delivery::UnknownId);
    }

    #[tokio::test]
    async fn reregister_replaces_sink() {
        let router = ClickRouter::new(2);
        let mut old_rx = router.register(1);
        let mut new_rx = router.register(1);

        assert_eq!(router.deliver(1, 7), Delivery::Delivered);
        assert_eq!(new_rx.recv().await.unwrap().timestamp, 7);
        // Old receiver's sender was replaced; it yields no events.
        assert!(old_rx.recv().await.is_none());
    }
}
