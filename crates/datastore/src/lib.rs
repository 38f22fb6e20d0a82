//! Data-sync hub events.
//!
//! The sync engine lives in the vendor SDK; this crate only models the
//! notifications it publishes and projects them for the application side.

pub mod hub;

pub use hub::{
    DataStoreHubEvent, NetworkStatusEvent, OutboxStatusEvent, ReadyEvent,
    SubscriptionsEstablishedEvent, SyncQueriesStartedEvent,
};
