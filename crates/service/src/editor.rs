//! Owner-facing mutation surface.
//!
//! The owning process never touches nodes directly; all mutation funnels
//! through the store primitives here so locking and notification policy
//! stay in one place.

use std::sync::Arc;

use traymenu_model::ItemAttrs;
use traymenu_store::{TreeStore, UpsertOutcome};

use crate::notify::Notifier;

/// Cheap handle for menu mutation from the owning process.
///
/// Notification policy: updates broadcast, first-time creation does not.
/// A freshly created node is not in any reader's cached tree yet, and
/// broadcasting every item of the initial population would be a signal
/// storm; the reader picks everything up on its first layout fetch.
#[derive(Clone)]
pub struct MenuEditor {
    store: Arc<TreeStore>,
    notifier: Notifier,
}

impl MenuEditor {
    pub(crate) fn new(store: Arc<TreeStore>, notifier: Notifier) -> Self {
        Self { store, notifier }
    }

    /// Creates or updates a menu item; broadcasts on the update branch.
    pub fn upsert_item(&self, id: i32, parent_id: i32, attrs: &ItemAttrs) {
        if self.store.upsert(id, parent_id, attrs) == UpsertOutcome::Updated {
            self.notifier.notify_changed();
        }
    }

    /// Appends a separator under the root; creation path, no broadcast.
    pub fn add_separator(&self, id: i32) {
        self.store.insert_separator(id);
    }

    /// Sets visibility; broadcasts only when the id resolved.
    pub fn set_visible(&self, id: i32, visible: bool) {
        if self.store.set_visible(id, visible) {
            self.notifier.notify_changed();
        }
    }

    /// Shorthand for `set_visible(id, true)`.
    pub fn show(&self, id: i32) {
        self.set_visible(id, true);
    }

    /// Shorthand for `set_visible(id, false)`.
    pub fn hide(&self, id: i32) {
        self.set_visible(id, false);
    }

    /// Sets the checkable/checked pair; broadcasts only when the id
    /// resolved.
    pub fn set_check_state(&self, id: i32, checkable: bool, checked: bool) {
        if self.store.apply_check_state(id, checkable, checked) {
            self.notifier.notify_changed();
        }
    }
}
