//! Untyped values that cross the application/native boundary.
//!
//! A boundary call arrives as a string-keyed map of loosely typed values.
//! Everything downstream reads it through the accessors on [`BoundaryMap`],
//! which own the type checks and the failure reporting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, BridgeResult};

/// A single value in a boundary payload.
///
/// Mirrors the kinds a platform channel codec can carry. Serialized untagged,
/// so the JSON form of a payload decodes straight into this type. Variant
/// order matters for decoding: integers try `Int`, then `UInt`, and only
/// non-integral numbers land in `Float`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundaryValue {
    Null,
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`.
    UInt(u64),
    Float(f64),
    String(String),
    List(Vec<BoundaryValue>),
    Map(BoundaryMap),
}

impl BoundaryValue {
    /// Short name of the value kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            BoundaryValue::Null => "null",
            BoundaryValue::Bool(_) => "bool",
            BoundaryValue::Int(_) => "int",
            BoundaryValue::UInt(_) => "uint",
            BoundaryValue::Float(_) => "float",
            BoundaryValue::String(_) => "string",
            BoundaryValue::List(_) => "list",
            BoundaryValue::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, BoundaryValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            BoundaryValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            BoundaryValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            BoundaryValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            BoundaryValue::Int(i) => u64::try_from(*i).ok(),
            BoundaryValue::UInt(u) => Some(*u),
            _ => None,
        }
    }

    /// Numeric view; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            BoundaryValue::Int(i) => Some(*i as f64),
            BoundaryValue::UInt(u) => Some(*u as f64),
            BoundaryValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[BoundaryValue]> {
        match self {
            BoundaryValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BoundaryMap> {
        match self {
            BoundaryValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for BoundaryValue {
    fn from(value: bool) -> Self {
        BoundaryValue::Bool(value)
    }
}

impl From<i32> for BoundaryValue {
    fn from(value: i32) -> Self {
        BoundaryValue::Int(i64::from(value))
    }
}

impl From<i64> for BoundaryValue {
    fn from(value: i64) -> Self {
        BoundaryValue::Int(value)
    }
}

impl From<u64> for BoundaryValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(BoundaryValue::UInt(value), BoundaryValue::Int)
    }
}

impl From<f64> for BoundaryValue {
    fn from(value: f64) -> Self {
        BoundaryValue::Float(value)
    }
}

impl From<&str> for BoundaryValue {
    fn from(value: &str) -> Self {
        BoundaryValue::String(value.to_owned())
    }
}

impl From<String> for BoundaryValue {
    fn from(value: String) -> Self {
        BoundaryValue::String(value)
    }
}

impl From<BoundaryMap> for BoundaryValue {
    fn from(value: BoundaryMap) -> Self {
        BoundaryValue::Map(value)
    }
}

impl<T: Into<BoundaryValue>> From<Vec<T>> for BoundaryValue {
    fn from(value: Vec<T>) -> Self {
        BoundaryValue::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<BoundaryValue>> From<Option<T>> for BoundaryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(BoundaryValue::Null, Into::into)
    }
}

/// String-keyed map of boundary values.
///
/// Keys iterate in sorted order, so two maps with the same entries render
/// identically regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundaryMap(BTreeMap<String, BoundaryValue>);

impl BoundaryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a JSON object (as produced by a JSON-based channel codec).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<BoundaryValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<BoundaryValue>) -> Option<BoundaryValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&BoundaryValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoundaryValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Mandatory non-empty string under `attribute`.
    ///
    /// Absent, empty and non-string values all fail with a missing-attribute
    /// error carrying `message`.
    pub fn require_str(&self, attribute: &str, message: &str) -> BridgeResult<&str> {
        match self.get(attribute) {
            Some(BoundaryValue::String(s)) if !s.is_empty() => Ok(s.as_str()),
            _ => Err(BridgeError::missing_attribute(message, attribute)),
        }
    }

    /// Optional string under `attribute`; explicit null reads as absent.
    pub fn optional_str(&self, attribute: &str, message: &str) -> BridgeResult<Option<&str>> {
        match self.get(attribute) {
            None | Some(BoundaryValue::Null) => Ok(None),
            Some(BoundaryValue::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(BridgeError::invalid_attribute(message, attribute)),
        }
    }

    /// Optional nested map under `attribute`; explicit null reads as absent.
    pub fn optional_map(&self, attribute: &str, message: &str) -> BridgeResult<Option<&BoundaryMap>> {
        match self.get(attribute) {
            None | Some(BoundaryValue::Null) => Ok(None),
            Some(BoundaryValue::Map(map)) => Ok(Some(map)),
            Some(_) => Err(BridgeError::invalid_attribute(message, attribute)),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for BoundaryMap
where
    K: Into<String>,
    V: Into<BoundaryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for BoundaryMap {
    type Item = (String, BoundaryValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, BoundaryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
