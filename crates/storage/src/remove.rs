//! Remove-object request and result.
//!
//! Boundary shape:
//!
//! ```text
//! {
//!   "key": <string, required>,
//!   "options": {
//!     "accessLevel": <string, optional>,
//!     "targetIdentityId": <string | null, optional>
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use cloudbridge_core::{
    BoundaryMap, BoundaryRequest, BridgeError, BridgeResult, ToBoundaryMap, ValueObject,
};

use crate::access_level::StorageAccessLevel;

/// Fixed message for every malformed remove call.
pub const REMOVE_MALFORMED: &str = "Remove request malformed.";

const KEY: &str = "key";
const OPTIONS: &str = "options";
const ACCESS_LEVEL: &str = "accessLevel";
const TARGET_IDENTITY_ID: &str = "targetIdentityId";

/// Options for a remove call.
///
/// `Default` is the vendor's default instance: no access level preference and
/// no target identity (the SDK then uses its configured defaults).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveOptions {
    access_level: Option<StorageAccessLevel>,
    target_identity_id: Option<String>,
}

impl ValueObject for RemoveOptions {}

impl RemoveOptions {
    pub fn with_access_level(self, access_level: Option<StorageAccessLevel>) -> Self {
        Self {
            access_level,
            ..self
        }
    }

    pub fn with_target_identity_id(self, target_identity_id: Option<String>) -> Self {
        Self {
            target_identity_id,
            ..self
        }
    }

    pub fn access_level(&self) -> Option<StorageAccessLevel> {
        self.access_level
    }

    pub fn target_identity_id(&self) -> Option<&str> {
        self.target_identity_id.as_deref()
    }

    /// Parse the nested `options` map.
    ///
    /// Unknown keys are ignored. An `accessLevel` string that names no level
    /// leaves the access level unset instead of failing; only values of the
    /// wrong kind (e.g. a number) are rejected.
    pub fn from_boundary(raw: &BoundaryMap) -> BridgeResult<Self> {
        let access_level = match raw.optional_str(ACCESS_LEVEL, REMOVE_MALFORMED)? {
            Some(name) => {
                let level = StorageAccessLevel::parse_lenient(name);
                if level.is_none() {
                    tracing::warn!(access_level = name, "unrecognized access level; using no preference");
                }
                level
            }
            None => None,
        };
        let target_identity_id = raw
            .optional_str(TARGET_IDENTITY_ID, REMOVE_MALFORMED)?
            .map(str::to_owned);

        Ok(Self::default()
            .with_access_level(access_level)
            .with_target_identity_id(target_identity_id))
    }
}

/// Validated request to remove one stored object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoveRequest {
    key: String,
    options: RemoveOptions,
}

impl RemoveRequest {
    /// Build directly from typed parts; `key` must be non-empty.
    pub fn new(key: impl Into<String>, options: RemoveOptions) -> BridgeResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(BridgeError::missing_attribute(REMOVE_MALFORMED, KEY));
        }
        Ok(Self { key, options })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn options(&self) -> &RemoveOptions {
        &self.options
    }
}

impl BoundaryRequest for RemoveRequest {
    const OPERATION: &'static str = "storage.remove";

    type Options = RemoveOptions;

    fn validate(raw: &BoundaryMap) -> BridgeResult<()> {
        raw.require_str(KEY, REMOVE_MALFORMED).map(|_| ())
    }

    fn from_boundary(raw: &BoundaryMap) -> BridgeResult<Self> {
        let key = raw.require_str(KEY, REMOVE_MALFORMED)?.to_owned();
        let options = match raw.optional_map(OPTIONS, REMOVE_MALFORMED)? {
            Some(options) => RemoveOptions::from_boundary(options)?,
            None => RemoveOptions::default(),
        };
        Ok(Self { key, options })
    }

    fn options(&self) -> &RemoveOptions {
        &self.options
    }
}

/// Outcome of a successful remove, as reported by the vendor SDK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveResult {
    pub key: String,
}

impl ToBoundaryMap for RemoveResult {
    fn to_boundary_map(&self) -> BoundaryMap {
        BoundaryMap::new().with(KEY, self.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudbridge_core::BoundaryValue;
    use proptest::prelude::*;

    fn options(entries: BoundaryMap) -> BoundaryMap {
        BoundaryMap::new().with(KEY, "photo.png").with(OPTIONS, entries)
    }

    #[test]
    fn key_only_yields_default_options() {
        let raw = BoundaryMap::new().with("key", "photo.png");

        RemoveRequest::validate(&raw).unwrap();
        let request = RemoveRequest::from_boundary(&raw).unwrap();

        assert_eq!(request.key(), "photo.png");
        assert_eq!(request.options(), &RemoveOptions::default());
    }

    #[test]
    fn full_options_are_parsed() {
        let raw = options(
            BoundaryMap::new()
                .with("accessLevel", "PRIVATE")
                .with("targetIdentityId", "user-42"),
        );

        let request = RemoveRequest::parse(&raw).unwrap();

        assert_eq!(request.options().access_level(), Some(StorageAccessLevel::Private));
        assert_eq!(request.options().target_identity_id(), Some("user-42"));
    }

    #[test]
    fn missing_key_fails_validation() {
        let raw = BoundaryMap::new().with("options", BoundaryMap::new());

        let err = RemoveRequest::validate(&raw).unwrap_err();
        assert_eq!(err.message(), REMOVE_MALFORMED);
        assert!(err.recovery_suggestion().contains("key"));
    }

    #[test]
    fn construction_without_validate_still_checks_key() {
        let raw = BoundaryMap::new().with("key", 42);

        let err = RemoveRequest::from_boundary(&raw).unwrap_err();
        assert_eq!(err, BridgeError::missing_attribute(REMOVE_MALFORMED, "key"));
    }

    #[test]
    fn unknown_access_level_degrades_to_none() {
        let raw = BoundaryMap::new()
            .with("key", "x")
            .with("options", BoundaryMap::new().with("accessLevel", "bogus"));

        let request = RemoveRequest::parse(&raw).unwrap();

        assert_eq!(request.key(), "x");
        assert_eq!(request.options().access_level(), None);
    }

    #[test]
    fn access_level_match_ignores_case() {
        let raw = options(BoundaryMap::new().with("accessLevel", "protected"));
        let request = RemoveRequest::parse(&raw).unwrap();
        assert_eq!(request.options().access_level(), Some(StorageAccessLevel::Protected));
    }

    #[test]
    fn explicit_nulls_read_as_absent() {
        let raw = BoundaryMap::new()
            .with("key", "x")
            .with("options", BoundaryValue::Null);
        assert_eq!(RemoveRequest::parse(&raw).unwrap().options(), &RemoveOptions::default());

        let raw = options(BoundaryMap::new().with("targetIdentityId", BoundaryValue::Null));
        assert_eq!(RemoveRequest::parse(&raw).unwrap().options().target_identity_id(), None);
    }

    #[test]
    fn unknown_option_keys_are_ignored() {
        let raw = options(
            BoundaryMap::new()
                .with("accessLevel", "public")
                .with("expires", 60)
                .with("somethingElse", BoundaryMap::new()),
        );

        let request = RemoveRequest::parse(&raw).unwrap();
        assert_eq!(
            request.options(),
            &RemoveOptions::default().with_access_level(Some(StorageAccessLevel::Public))
        );
    }

    #[test]
    fn mistyped_options_are_rejected() {
        let raw = BoundaryMap::new().with("key", "x").with("options", "private");
        let err = RemoveRequest::parse(&raw).unwrap_err();
        assert!(err.recovery_suggestion().contains("options"));

        let raw = options(BoundaryMap::new().with("accessLevel", 1));
        let err = RemoveRequest::parse(&raw).unwrap_err();
        assert!(err.recovery_suggestion().contains("accessLevel"));

        let raw = options(BoundaryMap::new().with("targetIdentityId", true));
        let err = RemoveRequest::parse(&raw).unwrap_err();
        assert!(err.recovery_suggestion().contains("targetIdentityId"));
    }

    fn parses_to_default_options<R: BoundaryRequest>(raw: &BoundaryMap) -> bool {
        R::parse(raw).is_ok_and(|request| request.options() == &<R::Options as Default>::default())
    }

    #[test]
    fn options_compare_by_value_through_request_contract() {
        assert!(parses_to_default_options::<RemoveRequest>(&BoundaryMap::new().with("key", "x")));
        assert!(parses_to_default_options::<RemoveRequest>(&options(
            BoundaryMap::new().with("accessLevel", "bogus").with("targetIdentityId", BoundaryValue::Null)
        )));
        assert!(!parses_to_default_options::<RemoveRequest>(&options(
            BoundaryMap::new().with("accessLevel", "public")
        )));
    }

    #[test]
    fn new_rejects_empty_key() {
        assert!(RemoveRequest::new("", RemoveOptions::default()).is_err());
        assert_eq!(RemoveRequest::new("a", RemoveOptions::default()).unwrap().key(), "a");
    }

    #[test]
    fn result_projects_key() {
        let map = RemoveResult { key: "photo.png".into() }.to_boundary_map();
        assert_eq!(map, BoundaryMap::new().with("key", "photo.png"));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: any non-empty string key parses, with default options when none are sent.
        #[test]
        fn any_string_key_parses(key in ".{1,64}") {
            let raw = BoundaryMap::new().with("key", key.clone());
            let request = RemoveRequest::parse(&raw).unwrap();
            prop_assert_eq!(request.key(), key.as_str());
            prop_assert_eq!(request.options(), &RemoveOptions::default());
        }

        /// Property: an access level string never causes a parse failure.
        #[test]
        fn access_level_strings_never_fail(level in ".{0,32}") {
            let raw = options(BoundaryMap::new().with("accessLevel", level.clone()));
            let request = RemoveRequest::parse(&raw);
            prop_assert!(request.is_ok());
            prop_assert_eq!(
                request.unwrap().options().access_level(),
                StorageAccessLevel::parse_lenient(&level)
            );
        }

        /// Property: a payload without a key always fails validation.
        #[test]
        fn keyless_payload_fails(extra in "[a-jl-z]{1,10}", value in any::<i64>()) {
            let raw = BoundaryMap::new().with(extra, value);
            prop_assert!(RemoveRequest::validate(&raw).is_err());
            prop_assert!(RemoveRequest::from_boundary(&raw).is_err());
        }
    }
}
