//! Wire-shaped layout projection returned to remote readers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::PropValue;

/// The serializable, recursive projection of the tree (or a subtree).
///
/// Readers receive this shape from `GetLayout`; the internal [`Node`]
/// representation never crosses the transport boundary.
///
/// [`Node`]: crate::Node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub id: i32,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, PropValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Layout>,
}

impl Layout {
    /// All node ids in this layout, depth-first.
    pub fn ids(&self) -> Vec<i32> {
        let mut out = vec![self.id];
        for child in &self.children {
            out.extend(child.ids());
        }
        out
    }

    /// Finds a layout node by id, depth-first.
    pub fn find(&self, id: i32) -> Option<&Layout> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Layout {
        Layout {
            id: 0,
            properties: BTreeMap::new(),
            children: vec![Layout {
                id: 1,
                properties: [("label".to_string(), PropValue::Str("File".into()))]
                    .into_iter()
                    .collect(),
                children: vec![Layout {
                    id: 2,
                    ..Layout::default()
                }],
            }],
        }
    }

    #[test]
    fn ids_depth_first() {
        assert_eq!(sample().ids(), vec![0, 1, 2]);
    }

    #[test]
    fn find_nested() {
        let layout = sample();
        assert_eq!(layout.find(2).unwrap().id, 2);
        assert!(layout.find(9).is_none());
    }

    #[test]
    fn empty_fields_omitted() {
        let json = serde_json::to_string(&Layout::default()).unwrap();
        assert_eq!(json, r#"{"id":0}"#);
    }

    #[test]
    fn json_roundtrip() {
        let layout = sample();
        let json = serde_json::to_string(&layout).unwrap();
        let parsed: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, parsed);
    }
}
