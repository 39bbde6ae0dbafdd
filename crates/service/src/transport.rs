//! The IPC seam between the service and a concrete transport adapter.

use serde::{Deserialize, Serialize};

use traymenu_model::props;

/// Errors a transport adapter can report back to the service.
///
/// Both are absorbed locally: a failed advertisement or signal is logged
/// and the service carries on with stale subscribers, never a dead process.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("transport not connected")]
    NotConnected,

    #[error("transport rejected the update: {0}")]
    Rejected(String),
}

/// What the service needs from the underlying IPC mechanism.
///
/// Any object/method-call substrate that can carry typed values, expose
/// readable properties, and emit named signals to subscribers qualifies.
/// Adapters also route inbound reader calls to [`MenuService`] operations;
/// that direction needs no trait, the adapter simply calls the methods.
///
/// [`MenuService`]: crate::MenuService
pub trait Transport: Send + Sync {
    /// Whether the owning process is currently connected to the transport.
    ///
    /// Mutation while disconnected is legal; it is simply not broadcast.
    fn is_connected(&self) -> bool;

    /// Updates the advertised `Version` property to the new revision,
    /// emitting a property-change to subscribers.
    fn set_version(&self, revision: u32) -> Result<(), TransportError>;

    /// Emits the layout-updated signal carrying the new revision.
    fn emit_layout_updated(&self, revision: u32) -> Result<(), TransportError>;
}

/// Snapshot of the advertised menu properties.
///
/// Everything but `version` is constant; `version` tracks the revision
/// counter and is pushed through [`Transport::set_version`] on change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertisedProps {
    pub version: u32,
    pub text_direction: String,
    pub status: String,
    pub icon_theme_path: Vec<String>,
}

impl AdvertisedProps {
    /// Builds the advertised property set at the given revision.
    pub fn at_revision(version: u32) -> Self {
        Self {
            version,
            text_direction: props::TEXT_DIRECTION_LTR.into(),
            status: props::STATUS_NORMAL.into(),
            icon_theme_path: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advertised_constants() {
        let props = AdvertisedProps::at_revision(3);
        assert_eq!(props.version, 3);
        assert_eq!(props.text_direction, "ltr");
        assert_eq!(props.status, "normal");
        assert!(props.icon_theme_path.is_empty());
    }

    #[test]
    fn advertised_json_field_names() {
        let json = serde_json::to_string(&AdvertisedProps::at_revision(1)).unwrap();
        assert!(json.contains("\"version\":1"));
        assert!(json.contains("\"textDirection\":\"ltr\""));
        assert!(json.contains("\"status\":\"normal\""));
        assert!(json.contains("\"iconThemePath\":[]"));
    }
}
