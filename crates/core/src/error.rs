//! Boundary error model.

use thiserror::Error;

use crate::messages::{self, INVALID_ATTRIBUTE, MISSING_ATTRIBUTE};
use crate::value::BoundaryMap;

/// Result type used across the marshalling layer.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Error raised while translating a boundary call into a typed request.
///
/// Keep this focused on malformed input. Vendor SDK failures (network,
/// authorization, service errors) are never mapped into this type; they are
/// passed through by the caller untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// A mandatory field was missing or a field held the wrong kind of value.
    ///
    /// `message` is fixed per request type, `recovery_suggestion` is a
    /// formatted template naming the offending attribute.
    #[error("{message} {recovery_suggestion}")]
    InvalidRequest {
        message: String,
        recovery_suggestion: String,
    },
}

impl BridgeError {
    pub fn invalid_request(message: impl Into<String>, recovery_suggestion: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            recovery_suggestion: recovery_suggestion.into(),
        }
    }

    /// Mandatory `attribute` is absent (or unusable).
    pub fn missing_attribute(message: impl Into<String>, attribute: &str) -> Self {
        Self::invalid_request(message, messages::format_attribute(MISSING_ATTRIBUTE, attribute))
    }

    /// Optional `attribute` is present but holds the wrong kind of value.
    pub fn invalid_attribute(message: impl Into<String>, attribute: &str) -> Self {
        Self::invalid_request(message, messages::format_attribute(INVALID_ATTRIBUTE, attribute))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidRequest { message, .. } => message,
        }
    }

    pub fn recovery_suggestion(&self) -> &str {
        match self {
            Self::InvalidRequest {
                recovery_suggestion,
                ..
            } => recovery_suggestion,
        }
    }

    /// Render as the `{ "message", "recoverySuggestion" }` details map the
    /// application side expects.
    pub fn to_boundary_map(&self) -> BoundaryMap {
        BoundaryMap::new()
            .with("message", self.message())
            .with("recoverySuggestion", self.recovery_suggestion())
    }
}
