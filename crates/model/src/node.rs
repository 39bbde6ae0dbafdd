//! Internal menu tree node.

use std::collections::BTreeMap;

use crate::props;
use crate::value::PropValue;

/// Owner-supplied attributes for creating or updating a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAttrs {
    /// Display text.
    pub label: String,
    /// Whether the item is enabled (clickable).
    pub enabled: bool,
    /// Whether the item renders a check indicator.
    pub checkable: bool,
    /// Checked state; only meaningful when `checkable`.
    pub checked: bool,
}

impl ItemAttrs {
    /// Attributes for a plain enabled item with the given label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            checkable: false,
            checked: false,
        }
    }
}

/// One element of the menu tree: identity, property bag, ordered children.
///
/// Child order is display order. The store owns all nodes; everything else
/// borrows them for the duration of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: i32,
    pub properties: BTreeMap<String, PropValue>,
    pub children: Vec<Node>,
}

impl Node {
    /// Creates an empty node with the given id.
    pub fn new(id: i32) -> Self {
        Self {
            id,
            properties: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Creates a separator node (no label, `type = "separator"`).
    pub fn separator(id: i32) -> Self {
        let mut node = Node::new(id);
        node.set_prop(props::NODE_TYPE, props::TYPE_SEPARATOR);
        node
    }

    /// Sets a single property.
    pub fn set_prop(&mut self, name: &str, value: impl Into<PropValue>) {
        self.properties.insert(name.to_string(), value.into());
    }

    /// Returns a property value, if present.
    pub fn prop(&self, name: &str) -> Option<&PropValue> {
        self.properties.get(name)
    }

    /// Depth-first search over this node and its whole subtree.
    pub fn find(&self, id: i32) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(&mut self, id: i32) -> Option<&mut Node> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }

    /// Applies owner attributes: label, enabled, and the toggle pair.
    ///
    /// The toggle pair is always written, checkable or not, so that a
    /// reader observing the node sees both keys agree with each other.
    pub fn apply_attrs(&mut self, attrs: &ItemAttrs) {
        self.set_prop(props::LABEL, attrs.label.as_str());
        self.set_prop(props::ENABLED, attrs.enabled);
        if attrs.checkable {
            self.set_prop(props::TOGGLE_TYPE, props::TOGGLE_CHECKMARK);
            self.set_prop(props::TOGGLE_STATE, if attrs.checked { 1 } else { 0 });
        } else {
            self.set_prop(props::TOGGLE_TYPE, "");
            self.set_prop(props::TOGGLE_STATE, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_self_and_descendants() {
        let mut root = Node::new(0);
        let mut child = Node::new(1);
        child.children.push(Node::new(2));
        root.children.push(child);
        root.children.push(Node::new(3));

        assert_eq!(root.find(0).unwrap().id, 0);
        assert_eq!(root.find(2).unwrap().id, 2);
        assert_eq!(root.find(3).unwrap().id, 3);
        assert!(root.find(99).is_none());
    }

    #[test]
    fn find_mut_allows_in_place_edit() {
        let mut root = Node::new(0);
        root.children.push(Node::new(1));

        root.find_mut(1).unwrap().set_prop(props::LABEL, "File");
        assert_eq!(
            root.find(1).unwrap().prop(props::LABEL),
            Some(&PropValue::Str("File".into()))
        );
    }

    #[test]
    fn separator_has_type_and_no_label() {
        let sep = Node::separator(7);
        assert_eq!(
            sep.prop(props::NODE_TYPE),
            Some(&PropValue::Str(props::TYPE_SEPARATOR.into()))
        );
        assert!(sep.prop(props::LABEL).is_none());
    }

    #[test]
    fn apply_attrs_plain_item() {
        let mut node = Node::new(1);
        node.apply_attrs(&ItemAttrs::labeled("Open"));

        assert_eq!(node.prop(props::LABEL).unwrap().as_str(), Some("Open"));
        assert_eq!(node.prop(props::ENABLED).unwrap().as_bool(), Some(true));
        assert_eq!(node.prop(props::TOGGLE_TYPE).unwrap().as_str(), Some(""));
        assert_eq!(node.prop(props::TOGGLE_STATE).unwrap().as_int(), Some(0));
    }

    #[test]
    fn apply_attrs_checkable_item() {
        let mut node = Node::new(1);
        node.apply_attrs(&ItemAttrs {
            label: "Mute".into(),
            enabled: true,
            checkable: true,
            checked: true,
        });

        assert_eq!(
            node.prop(props::TOGGLE_TYPE).unwrap().as_str(),
            Some(props::TOGGLE_CHECKMARK)
        );
        assert_eq!(node.prop(props::TOGGLE_STATE).unwrap().as_int(), Some(1));
    }

    #[test]
    fn apply_attrs_clears_toggle_on_update() {
        let mut node = Node::new(1);
        node.apply_attrs(&ItemAttrs {
            label: "Mute".into(),
            enabled: true,
            checkable: true,
            checked: true,
        });
        node.apply_attrs(&ItemAttrs::labeled("Mute"));

        assert_eq!(node.prop(props::TOGGLE_TYPE).unwrap().as_str(), Some(""));
        assert_eq!(node.prop(props::TOGGLE_STATE).unwrap().as_int(), Some(0));
    }
}
