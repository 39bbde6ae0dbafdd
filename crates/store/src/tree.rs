//! The whole-tree locked store.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use traymenu_model::{ItemAttrs, Layout, Node, PropValue, ROOT_ID, props};

use crate::StoreError;
use crate::project::project;
use crate::revision::Revision;

/// Which branch an upsert took, so the caller can decide whether to notify.
///
/// Updates are broadcast; first-time creation is not, because a reader has
/// not yet fetched a tree containing the node (initial population would
/// otherwise produce a signal per item).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// Owns the menu tree and its revision counter.
///
/// One exclusive lock guards both structure and properties; reads take a
/// shared lock for the duration of a single traversal or projection. The
/// granularity is whole-tree: mutation is user-driven and rare, traversal
/// is cheap at the expected tree sizes (tens of items).
#[derive(Debug)]
pub struct TreeStore {
    root: RwLock<Node>,
    revision: Revision,
}

impl Default for TreeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeStore {
    /// Creates a store containing only the root node (id 0).
    pub fn new() -> Self {
        Self {
            root: RwLock::new(Node::new(ROOT_ID)),
            revision: Revision::new(),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Node> {
        self.root.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Node> {
        self.root.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current revision of the externally-visible tree state.
    pub fn revision(&self) -> u32 {
        self.revision.current()
    }

    /// Bumps the revision counter, returning the new value.
    pub fn bump_revision(&self) -> u32 {
        self.revision.bump()
    }

    /// Creates or updates the node `id`.
    ///
    /// If the id is already present (the root included), its attributes are
    /// rewritten in place. Otherwise a new node is attached as the last
    /// child of `parent_id`, falling back to the root when the parent does
    /// not resolve; a previously childless non-root parent is promoted to
    /// `children-display = "submenu"` under the same exclusive lock.
    pub fn upsert(&self, id: i32, parent_id: i32, attrs: &ItemAttrs) -> UpsertOutcome {
        let mut root = self.write();

        if let Some(node) = root.find_mut(id) {
            node.apply_attrs(attrs);
            return UpsertOutcome::Updated;
        }

        let mut node = Node::new(id);
        node.apply_attrs(attrs);

        let target_id = if root.find(parent_id).is_some() {
            parent_id
        } else {
            debug!(id, parent_id, "upsert parent not found, attaching to root");
            ROOT_ID
        };
        if let Some(parent) = root.find_mut(target_id) {
            if parent.id != ROOT_ID && parent.children.is_empty() {
                parent.set_prop(props::CHILDREN_DISPLAY, props::DISPLAY_SUBMENU);
            }
            parent.children.push(node);
        }
        UpsertOutcome::Created
    }

    /// Appends a separator node directly under the root.
    pub fn insert_separator(&self, id: i32) {
        let mut root = self.write();
        root.children.push(Node::separator(id));
    }

    /// Sets the `visible` property. Returns whether the id resolved;
    /// an unresolved id is a silent no-op.
    pub fn set_visible(&self, id: i32, visible: bool) -> bool {
        let mut root = self.write();
        match root.find_mut(id) {
            Some(node) => {
                node.set_prop(props::VISIBLE, visible);
                true
            }
            None => false,
        }
    }

    /// Writes the toggle pair for the node: `"checkmark"`/1|0 when
    /// checkable, empty/0 otherwise. Returns whether the id resolved.
    pub fn apply_check_state(&self, id: i32, checkable: bool, checked: bool) -> bool {
        let mut root = self.write();
        match root.find_mut(id) {
            Some(node) => {
                if checkable {
                    node.set_prop(props::TOGGLE_TYPE, props::TOGGLE_CHECKMARK);
                    node.set_prop(props::TOGGLE_STATE, if checked { 1 } else { 0 });
                } else {
                    node.set_prop(props::TOGGLE_TYPE, "");
                    node.set_prop(props::TOGGLE_STATE, 0);
                }
                true
            }
            None => false,
        }
    }

    /// Returns `true` if a node with the given id is reachable from root.
    pub fn contains(&self, id: i32) -> bool {
        self.read().find(id).is_some()
    }

    /// Reads a single property; `None` when id or property is missing.
    pub fn property(&self, id: i32, name: &str) -> Option<PropValue> {
        self.read().find(id).and_then(|node| node.prop(name).cloned())
    }

    /// Property maps for the resolved ids, in input order.
    ///
    /// Unresolved ids are silently skipped (partial results, never an
    /// error). Empty `property_names` means all properties.
    pub fn group_properties(
        &self,
        ids: &[i32],
        property_names: &[String],
    ) -> Vec<(i32, BTreeMap<String, PropValue>)> {
        let root = self.read();
        ids.iter()
            .filter_map(|&id| {
                root.find(id)
                    .map(|node| (id, project(node, 0, property_names).properties))
            })
            .collect()
    }

    /// Projects the subtree rooted at `parent_id` into a wire layout.
    ///
    /// Depth -1 is unbounded, 0 the node only; `parent_id` 0 with depth -1
    /// is the whole tree. An empty filter includes every property.
    pub fn project(
        &self,
        parent_id: i32,
        depth: i32,
        property_names: &[String],
    ) -> Result<Layout, StoreError> {
        let root = self.read();
        let node = root.find(parent_id).ok_or(StoreError::NotFound(parent_id))?;
        Ok(project(node, depth, property_names))
    }
}
