//! Contracts for the two directions of boundary marshalling.

use crate::error::BridgeResult;
use crate::value::BoundaryMap;
use crate::value_object::ValueObject;

/// A typed request parsed from an untyped boundary call.
///
/// `validate` is usable on its own before anything is constructed (a call
/// router can reject a payload early). `from_boundary` repeats the mandatory
/// checks, so constructing without a prior `validate` still fails the same
/// way instead of producing a half-built request.
///
/// Requests must not perform I/O while parsing; they are pure transformations
/// of the payload.
pub trait BoundaryRequest: Sized + Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable name of the operation (e.g. "storage.remove"), used in logs.
    const OPERATION: &'static str;

    /// Parsed option set; `Default` is what an absent `options` map yields.
    type Options: ValueObject + Default;

    /// Check mandatory fields without building anything.
    fn validate(raw: &BoundaryMap) -> BridgeResult<()>;

    /// Build the typed request.
    fn from_boundary(raw: &BoundaryMap) -> BridgeResult<Self>;

    fn options(&self) -> &Self::Options;

    /// Validate, then build.
    fn parse(raw: &BoundaryMap) -> BridgeResult<Self> {
        Self::validate(raw)?;
        Self::from_boundary(raw)
    }
}

/// Projection of a typed value back into an untyped boundary map.
///
/// Implementations must be total and deterministic: the same value always
/// yields a content-equal map.
pub trait ToBoundaryMap {
    fn to_boundary_map(&self) -> BoundaryMap;
}
