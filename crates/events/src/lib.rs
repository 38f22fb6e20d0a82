//! Hub events and their delivery across the boundary.
//!
//! Vendor SDK notifications are modelled as typed [`HubEvent`]s. The
//! [`HubEventForwarder`] projects each one into a boundary map and hands it to
//! an [`EventSink`], the seam to whatever dispatch mechanism carries events to
//! the application side.

pub mod event;
pub mod forwarder;
pub mod sink;

pub use event::{EVENT_NAME_KEY, HubEvent, event_map};
pub use forwarder::HubEventForwarder;
pub use sink::EventSink;
