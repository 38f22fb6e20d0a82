use serde::{Deserialize, Serialize};

use cloudbridge_core::{BoundaryMap, ToBoundaryMap};
use cloudbridge_events::{HubEvent, event_map};

/// Event: the sync engine's view of network reachability changed.
///
/// The event name is always `networkStatus`; it is not taken from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStatusEvent {
    pub active: bool,
}

/// Event: the local mutation outbox became empty or non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboxStatusEvent {
    pub is_empty: bool,
}

/// Event: all remote subscriptions are established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubscriptionsEstablishedEvent;

/// Event: the initial sync queries started for the listed models.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SyncQueriesStartedEvent {
    pub models: Vec<String>,
}

/// Event: the sync engine finished starting up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReadyEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataStoreHubEvent {
    NetworkStatus(NetworkStatusEvent),
    OutboxStatus(OutboxStatusEvent),
    SubscriptionsEstablished(SubscriptionsEstablishedEvent),
    SyncQueriesStarted(SyncQueriesStartedEvent),
    Ready(ReadyEvent),
}

impl HubEvent for NetworkStatusEvent {
    fn event_name(&self) -> &'static str {
        "networkStatus"
    }
}

impl ToBoundaryMap for NetworkStatusEvent {
    fn to_boundary_map(&self) -> BoundaryMap {
        event_map(self).with("active", self.active)
    }
}

impl HubEvent for OutboxStatusEvent {
    fn event_name(&self) -> &'static str {
        "outboxStatus"
    }
}

impl ToBoundaryMap for OutboxStatusEvent {
    fn to_boundary_map(&self) -> BoundaryMap {
        event_map(self).with("isEmpty", self.is_empty)
    }
}

impl HubEvent for SubscriptionsEstablishedEvent {
    fn event_name(&self) -> &'static str {
        "subscriptionsEstablished"
    }
}

impl ToBoundaryMap for SubscriptionsEstablishedEvent {
    fn to_boundary_map(&self) -> BoundaryMap {
        event_map(self)
    }
}

impl HubEvent for SyncQueriesStartedEvent {
    fn event_name(&self) -> &'static str {
        "syncQueriesStarted"
    }
}

impl ToBoundaryMap for SyncQueriesStartedEvent {
    fn to_boundary_map(&self) -> BoundaryMap {
        event_map(self).with("models", self.models.clone())
    }
}

impl HubEvent for ReadyEvent {
    fn event_name(&self) -> &'static str {
        "ready"
    }
}

impl ToBoundaryMap for ReadyEvent {
    fn to_boundary_map(&self) -> BoundaryMap {
        event_map(self)
    }
}

impl HubEvent for DataStoreHubEvent {
    fn event_name(&self) -> &'static str {
        match self {
            DataStoreHubEvent::NetworkStatus(e) => e.event_name(),
            DataStoreHubEvent::OutboxStatus(e) => e.event_name(),
            DataStoreHubEvent::SubscriptionsEstablished(e) => e.event_name(),
            DataStoreHubEvent::SyncQueriesStarted(e) => e.event_name(),
            DataStoreHubEvent::Ready(e) => e.event_name(),
        }
    }
}

impl ToBoundaryMap for DataStoreHubEvent {
    fn to_boundary_map(&self) -> BoundaryMap {
        match self {
            DataStoreHubEvent::NetworkStatus(e) => e.to_boundary_map(),
            DataStoreHubEvent::OutboxStatus(e) => e.to_boundary_map(),
            DataStoreHubEvent::SubscriptionsEstablished(e) => e.to_boundary_map(),
            DataStoreHubEvent::SyncQueriesStarted(e) => e.to_boundary_map(),
            DataStoreHubEvent::Ready(e) => e.to_boundary_map(),
        }
    }
}

macro_rules! impl_from_event {
    ($variant:ident, $t:ty) => {
        impl From<$t> for DataStoreHubEvent {
            fn from(value: $t) -> Self {
                DataStoreHubEvent::$variant(value)
            }
        }
    };
}

impl_from_event!(NetworkStatus, NetworkStatusEvent);
impl_from_event!(OutboxStatus, OutboxStatusEvent);
impl_from_event!(SubscriptionsEstablished, SubscriptionsEstablishedEvent);
impl_from_event!(SyncQueriesStarted, SyncQueriesStartedEvent);
impl_from_event!(Ready, ReadyEvent);
