//! Menu export service.
//!
//! Exposes a live, revisioned menu tree to an external desktop-shell reader
//! through a request/response and signal surface, while the owning process
//! keeps mutating the tree. The pieces:
//!
//! - [`MenuService`] — the query/command operations a remote reader invokes
//! - [`Notifier`] — bumps the revision and broadcasts layout changes
//! - [`ClickRouter`] — bounded per-item delivery of click notifications
//! - [`MenuEditor`] — the owner-facing mutation surface, wired so that
//!   notification policy lives in one place
//! - [`Transport`] — the seam a concrete IPC adapter implements
//!
//! The service never renders anything; it only maintains exportable state
//! and answers queries about it.

mod click;
mod editor;
mod handler;
mod notify;
mod transport;

pub use click::{ClickEvent, ClickRouter, Delivery};
pub use editor::MenuEditor;
pub use handler::{MenuEvent, MenuService, ServiceConfig};
pub use notify::Notifier;
pub use transport::{AdvertisedProps, Transport, TransportError};

/// Default capacity of a per-item click queue.
///
/// Delivery is non-blocking: when a consumer falls this far behind, further
/// clicks for that item are dropped (newest first) rather than stalling
/// protocol dispatch for unrelated requests.
pub const CLICK_QUEUE_SIZE: usize = 16;

/// The only event kind the service acts on.
pub const EVENT_CLICKED: &str = "clicked";
