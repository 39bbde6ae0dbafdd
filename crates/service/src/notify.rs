//! Change notification: revision bump, version advertisement, signal.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use traymenu_store::TreeStore;

use crate::transport::Transport;

/// Broadcasts externally-visible tree changes.
///
/// A mutation call site completes its structural or property change first,
/// then calls [`notify_changed`](Self::notify_changed). That ordering is
/// what lets a reader observing revision N rely on a subsequent layout
/// fetch being at least as fresh as N.
#[derive(Clone)]
pub struct Notifier {
    store: Arc<TreeStore>,
    transport: Arc<dyn Transport>,
    shutdown: CancellationToken,
}

impl Notifier {
    pub fn new(
        store: Arc<TreeStore>,
        transport: Arc<dyn Transport>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            store,
            transport,
            shutdown,
        }
    }

    /// Bumps the revision and broadcasts it.
    ///
    /// The advertised `Version` property is updated first, synchronously,
    /// then the layout-updated signal is emitted, both carrying the same
    /// revision; a reader never sees the signal for N while the property
    /// still shows N-1. If the property update fails the signal is
    /// suppressed for the same reason.
    ///
    /// Returns the new revision, or `None` when the service is shut down
    /// or the transport is disconnected (legal, silently un-broadcast).
    pub fn notify_changed(&self) -> Option<u32> {
        if self.shutdown.is_cancelled() || !self.transport.is_connected() {
            return None;
        }

        let revision = self.store.bump_revision();

        if let Err(e) = self.transport.set_version(revision) {
            warn!(revision, "failed to update advertised menu version: {e}");
            return Some(revision);
        }
        if let Err(e) = self.transport.emit_layout_updated(revision) {
            warn!(revision, "failed to emit layout updated signal: {e}");
        }
        Some(revision)
    }
}
