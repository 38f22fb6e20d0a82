//! Boundary entry points for storage calls.
//!
//! ```text
//! untyped call ─▶ validate ─▶ typed request ─▶ StorageCategory ─▶ result map
//!                    │                               │
//!                    └─ InvalidRequest (no SDK call) └─ SDK error, unchanged
//! ```

use thiserror::Error;

use cloudbridge_core::{BoundaryMap, BoundaryRequest, BridgeError, ToBoundaryMap};

use crate::category::StorageCategory;
use crate::remove::RemoveRequest;

/// Failure of a storage boundary call.
#[derive(Debug, Error)]
pub enum StorageCallError<E> {
    /// The payload was malformed; the SDK was never called.
    #[error(transparent)]
    Request(#[from] BridgeError),
    /// The vendor SDK failed; the error is passed through as-is.
    #[error("storage category failed: {0:?}")]
    Sdk(E),
}

impl<E> StorageCallError<E> {
    /// The validation error, if this failure happened before the SDK call.
    pub fn as_request(&self) -> Option<&BridgeError> {
        match self {
            StorageCallError::Request(err) => Some(err),
            StorageCallError::Sdk(_) => None,
        }
    }

    pub fn into_sdk(self) -> Option<E> {
        match self {
            StorageCallError::Sdk(err) => Some(err),
            StorageCallError::Request(_) => None,
        }
    }
}

/// Storage call handler: parses boundary calls and drives the category.
#[derive(Debug, Clone)]
pub struct StoragePlugin<C> {
    category: C,
}

impl<C> StoragePlugin<C>
where
    C: StorageCategory,
{
    pub fn new(category: C) -> Self {
        Self { category }
    }

    pub fn category(&self) -> &C {
        &self.category
    }

    /// Handle a `remove` call.
    pub fn remove(&self, raw: &BoundaryMap) -> Result<BoundaryMap, StorageCallError<C::Error>> {
        let request = parse_request::<RemoveRequest>(raw)?;

        let result = self.category.remove(&request).map_err(|err| {
            tracing::warn!(operation = RemoveRequest::OPERATION, key = request.key(), "storage category error: {err:?}");
            StorageCallError::Sdk(err)
        })?;

        tracing::debug!(operation = RemoveRequest::OPERATION, key = %result.key, "storage call completed");
        Ok(result.to_boundary_map())
    }
}

fn parse_request<R: BoundaryRequest>(raw: &BoundaryMap) -> Result<R, BridgeError> {
    let request = R::parse(raw).inspect_err(|err| {
        tracing::warn!(operation = R::OPERATION, "rejected boundary call: {err}");
    })?;

    tracing::debug!(operation = R::OPERATION, options = ?request.options(), "parsed boundary request");
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    use crate::{RemoveOptions, RemoveResult, StorageAccessLevel};

    #[derive(Debug, PartialEq)]
    struct Denied;

    /// Records every request it sees.
    #[derive(Default)]
    struct RecordingCategory {
        seen: RefCell<Vec<RemoveRequest>>,
        fail: Cell<bool>,
    }

    impl StorageCategory for RecordingCategory {
        type Error = &'static str;

        fn remove(&self, request: &RemoveRequest) -> Result<RemoveResult, Self::Error> {
            self.seen.borrow_mut().push(request.clone());
            if self.fail.get() {
                return Err("access denied");
            }
            Ok(RemoveResult {
                key: request.key().to_owned(),
            })
        }
    }

    #[test]
    fn remove_returns_result_map() {
        let plugin = StoragePlugin::new(RecordingCategory::default());
        let raw = BoundaryMap::new()
            .with("key", "photo.png")
            .with("options", BoundaryMap::new().with("accessLevel", "private"));

        let out = plugin.remove(&raw).unwrap();

        assert_eq!(out, BoundaryMap::new().with("key", "photo.png"));
        let seen = plugin.category().seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].options(),
            &RemoveOptions::default().with_access_level(Some(StorageAccessLevel::Private))
        );
    }

    #[test]
    fn malformed_call_never_reaches_category() {
        let plugin = StoragePlugin::new(RecordingCategory::default());

        let err = plugin.remove(&BoundaryMap::new()).unwrap_err();

        assert!(err.as_request().is_some());
        assert!(plugin.category().seen.borrow().is_empty());
    }

    #[test]
    fn category_error_is_passed_through() {
        let category = RecordingCategory::default();
        category.fail.set(true);
        let plugin = StoragePlugin::new(&category);

        let err = plugin.remove(&BoundaryMap::new().with("key", "x")).unwrap_err();

        assert!(err.as_request().is_none());
        assert_eq!(err.into_sdk(), Some("access denied"));
        assert_eq!(category.seen.borrow().len(), 1);
    }

    #[test]
    fn request_error_displays_message_and_suggestion() {
        let err: StorageCallError<Denied> = BridgeError::missing_attribute("Remove request malformed.", "key").into();
        assert!(err.to_string().starts_with("Remove request malformed."));
        assert!(err.to_string().contains("key"));
    }
}
