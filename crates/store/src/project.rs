//! Projection of the internal node tree into the wire-shaped layout.

use traymenu_model::{Layout, Node};

/// Builds the serializable layout for `node`.
///
/// `depth` limits how many levels of children are included: `-1` means the
/// whole subtree, `0` the node itself with no children. An empty
/// `property_names` includes every property; otherwise only the named
/// properties present on each node are copied.
///
/// Pure over the node; the caller holds the tree lock for the duration.
pub(crate) fn project(node: &Node, depth: i32, property_names: &[String]) -> Layout {
    let properties = if property_names.is_empty() {
        node.properties.clone()
    } else {
        property_names
            .iter()
            .filter_map(|name| {
                node.prop(name)
                    .map(|value| (name.clone(), value.clone()))
            })
            .collect()
    };

    let children = if depth == 0 {
        Vec::new()
    } else {
        let child_depth = if depth < 0 { depth } else { depth - 1 };
        node.children
            .iter()
            .map(|child| project(child, child_depth, property_names))
            .collect()
    };

    Layout {
        id: node.id,
        properties,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use traymenu_model::props;

    fn sample_tree() -> Node {
        let mut root = Node::new(0);
        let mut file = Node::new(1);
        file.set_prop(props::LABEL, "File");
        file.set_prop(props::ENABLED, true);
        let mut open = Node::new(2);
        open.set_prop(props::LABEL, "Open");
        file.children.push(open);
        root.children.push(file);
        root
    }

    #[test]
    fn unbounded_includes_whole_subtree() {
        let layout = project(&sample_tree(), -1, &[]);
        assert_eq!(layout.ids(), vec![0, 1, 2]);
    }

    #[test]
    fn depth_zero_is_node_only() {
        let layout = project(&sample_tree(), 0, &[]);
        assert_eq!(layout.ids(), vec![0]);
    }

    #[test]
    fn depth_limits_levels() {
        let layout = project(&sample_tree(), 1, &[]);
        assert_eq!(layout.ids(), vec![0, 1]);
        assert!(layout.find(1).unwrap().children.is_empty());
    }

    #[test]
    fn empty_filter_includes_all_properties() {
        let layout = project(&sample_tree(), -1, &[]);
        let file = layout.find(1).unwrap();
        assert!(file.properties.contains_key(props::LABEL));
        assert!(file.properties.contains_key(props::ENABLED));
    }

    #[test]
    fn filter_keeps_only_named_present_properties() {
        let names = vec![props::LABEL.to_string(), "nonexistent".to_string()];
        let layout = project(&sample_tree(), -1, &names);
        let file = layout.find(1).unwrap();
        assert_eq!(file.properties.len(), 1);
        assert!(file.properties.contains_key(props::LABEL));
    }
}
