//! The query/command surface a remote reader invokes.
//!
//! Operations are stateless per call; the only cross-call state is the
//! tree store and the revision counter. A transport adapter maps the
//! canonical method names of the menu convention (`GetLayout`,
//! `GetGroupProperties`, `GetProperty`, `Event`, `EventGroup`,
//! `AboutToShow`, `AboutToShowGroup`) onto these methods.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use traymenu_model::{Layout, PropValue};
use traymenu_store::{StoreError, TreeStore};

use crate::click::{ClickRouter, Delivery};
use crate::editor::MenuEditor;
use crate::notify::Notifier;
use crate::transport::Transport;
use crate::{CLICK_QUEUE_SIZE, EVENT_CLICKED};

/// Service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Capacity of each per-item click queue.
    pub click_queue_size: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            click_queue_size: CLICK_QUEUE_SIZE,
        }
    }
}

/// One entry of an `EventGroup` batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEvent {
    pub id: i32,
    pub event_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PropValue>,
    pub timestamp: u32,
}

/// The menu export service.
///
/// Constructed once when the export starts (tree containing only the root
/// node, revision 0), shared by reference with the transport adapter and
/// the owning-process layer, torn down via [`shutdown`](Self::shutdown)
/// when the owner disconnects.
pub struct MenuService {
    store: Arc<TreeStore>,
    clicks: ClickRouter,
    notifier: Notifier,
    shutdown: CancellationToken,
}

impl MenuService {
    /// Creates the service over the given transport.
    pub fn new(config: ServiceConfig, transport: Arc<dyn Transport>) -> Arc<Self> {
        let store = Arc::new(TreeStore::new());
        let shutdown = CancellationToken::new();
        let notifier = Notifier::new(Arc::clone(&store), transport, shutdown.clone());
        Arc::new(Self {
            store,
            clicks: ClickRouter::new(config.click_queue_size),
            notifier,
            shutdown,
        })
    }

    /// The shared tree store.
    pub fn store(&self) -> &Arc<TreeStore> {
        &self.store
    }

    /// The click sink registry for the owning layer.
    pub fn clicks(&self) -> &ClickRouter {
        &self.clicks
    }

    /// The owner-facing mutation surface.
    pub fn editor(&self) -> MenuEditor {
        MenuEditor::new(Arc::clone(&self.store), self.notifier.clone())
    }

    /// Stops future notification delivery. In-flight reads are unaffected.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    /// `GetLayout`: current revision plus the projected subtree.
    ///
    /// An unresolved parent yields the zero-value layout with no error;
    /// readers of this protocol family expect leniency, not a taxonomy.
    pub fn get_layout(
        &self,
        parent_id: i32,
        recursion_depth: i32,
        property_names: &[String],
    ) -> (u32, Layout) {
        let revision = self.store.revision();
        match self.store.project(parent_id, recursion_depth, property_names) {
            Ok(layout) => (revision, layout),
            Err(StoreError::NotFound(id)) => {
                debug!(parent_id = id, "layout requested for unknown parent");
                (revision, Layout::default())
            }
        }
    }

    /// `GetGroupProperties`: one entry per resolved id, unresolved ids
    /// silently skipped.
    pub fn get_group_properties(
        &self,
        ids: &[i32],
        property_names: &[String],
    ) -> Vec<(i32, BTreeMap<String, PropValue>)> {
        self.store.group_properties(ids, property_names)
    }

    /// `GetProperty`: `None` when the id or the property is missing.
    pub fn get_property(&self, id: i32, name: &str) -> Option<PropValue> {
        self.store.property(id, name)
    }

    /// `Event`: delivers a click for `id`; every other event kind is
    /// ignored. An unresolved id is logged and dropped, never a protocol
    /// error.
    pub fn event(&self, id: i32, event_id: &str, _data: Option<PropValue>, timestamp: u32) {
        if event_id == EVENT_CLICKED {
            self.clicks.deliver(id, timestamp);
        }
    }

    /// `EventGroup`: per-item handling as for [`event`](Self::event),
    /// returning the clicked ids that did not resolve.
    ///
    /// Unresolved ids are skipped and the batch continues; a single bad id
    /// does not abort delivery for the rest.
    pub fn event_group(&self, events: &[MenuEvent]) -> Vec<i32> {
        let mut id_errors = Vec::new();
        for event in events {
            if event.event_id != EVENT_CLICKED {
                continue;
            }
            if self.clicks.deliver(event.id, event.timestamp) == Delivery::UnknownId {
                id_errors.push(event.id);
            }
        }
        id_errors
    }

    /// `AboutToShow`: the exported tree is always current, so no update is
    /// ever needed.
    pub fn about_to_show(&self, _id: i32) -> bool {
        false
    }

    /// `AboutToShowGroup`: no updates needed, no id errors.
    pub fn about_to_show_group(&self, _ids: &[i32]) -> (Vec<i32>, Vec<i32>) {
        (Vec::new(), Vec::new())
    }
}
