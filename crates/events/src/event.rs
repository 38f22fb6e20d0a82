use cloudbridge_core::{BoundaryMap, ToBoundaryMap};

/// Key holding the event discriminator in every projected event.
pub const EVENT_NAME_KEY: &str = "eventName";

/// A typed notification raised by the vendor SDK.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **self-describing** (`event_name` is the discriminator the application
///   side switches on)
/// - **total to project**: `to_boundary_map` never fails and emits one entry
///   per field, keyed by the field's wire name
pub trait HubEvent: ToBoundaryMap + Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name (e.g. "networkStatus").
    fn event_name(&self) -> &'static str;
}

/// Start a projection: a map holding only the event discriminator.
pub fn event_map<E: HubEvent + ?Sized>(event: &E) -> BoundaryMap {
    BoundaryMap::new().with(EVENT_NAME_KEY, event.event_name())
}
