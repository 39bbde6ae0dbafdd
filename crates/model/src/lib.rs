//! Data model for the exported menu tree.
//!
//! A menu is a recursively structured tree of [`Node`]s, each carrying a
//! property bag of [`PropValue`]s and an ordered child list. Remote readers
//! never see `Node` directly; they receive the wire-shaped [`Layout`]
//! projection produced by the store.

pub mod layout;
pub mod node;
pub mod props;
pub mod value;

pub use layout::Layout;
pub use node::{ItemAttrs, Node};
pub use value::PropValue;

/// Reserved identity of the root node. Never appears below the root.
pub const ROOT_ID: i32 = 0;

/// Recursion depth meaning "the whole subtree".
pub const DEPTH_UNBOUNDED: i32 = -1;
