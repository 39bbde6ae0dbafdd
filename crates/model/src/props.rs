//! Property names and well-known values of the menu convention.
//!
//! Keys are present on a node only when semantically meaningful, e.g.
//! [`TOGGLE_TYPE`] is only set once checkable-ness has been defined.

/// Display text of an item.
pub const LABEL: &str = "label";

/// Whether the item can be activated.
pub const ENABLED: &str = "enabled";

/// Whether the item is shown at all. Absent means visible.
pub const VISIBLE: &str = "visible";

/// Node kind; only ever set to [`TYPE_SEPARATOR`].
pub const NODE_TYPE: &str = "type";

/// How checkable-ness renders ([`TOGGLE_CHECKMARK`] or empty).
pub const TOGGLE_TYPE: &str = "toggle-type";

/// Checked state: 1 checked, 0 unchecked.
pub const TOGGLE_STATE: &str = "toggle-state";

/// Set to [`DISPLAY_SUBMENU`] on a node the first time it gains a child.
pub const CHILDREN_DISPLAY: &str = "children-display";

/// Value of [`NODE_TYPE`] for separator nodes.
pub const TYPE_SEPARATOR: &str = "separator";

/// Value of [`CHILDREN_DISPLAY`] for nodes with children.
pub const DISPLAY_SUBMENU: &str = "submenu";

/// Value of [`TOGGLE_TYPE`] for checkable items.
pub const TOGGLE_CHECKMARK: &str = "checkmark";

/// Advertised text direction (constant).
pub const TEXT_DIRECTION_LTR: &str = "ltr";

/// Advertised menu status (constant).
pub const STATUS_NORMAL: &str = "normal";
