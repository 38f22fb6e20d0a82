//! Seam to the vendor storage SDK.

use crate::remove::{RemoveRequest, RemoveResult};

/// The vendor storage category, treated as an opaque collaborator.
///
/// Implementations own transport, retries and authorization. The error type is
/// whatever the SDK reports; callers pass it through without translating it.
pub trait StorageCategory {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn remove(&self, request: &RemoveRequest) -> Result<RemoveResult, Self::Error>;
}

impl<C> StorageCategory for &C
where
    C: StorageCategory + ?Sized,
{
    type Error = C::Error;

    fn remove(&self, request: &RemoveRequest) -> Result<RemoveResult, Self::Error> {
        (**self).remove(request)
    }
}
