//! `cloudbridge-core` — boundary marshalling building blocks.
//!
//! This crate contains the **untyped boundary model** shared by every adapter
//! (no vendor SDK concerns): the value union that crosses the boundary, typed
//! accessors over it, and the single error kind raised while parsing.

pub mod error;
pub mod messages;
pub mod request;
pub mod value;
pub mod value_object;

pub use error::{BridgeError, BridgeResult};
pub use request::{BoundaryRequest, ToBoundaryMap};
pub use value::{BoundaryMap, BoundaryValue};
pub use value_object::ValueObject;
