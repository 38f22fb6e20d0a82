//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Parsed option
/// sets are the typical case here: to "modify" one, derive a new value
/// (`with_*` methods) instead of mutating in place.
///
/// ## Design Constraints
///
/// - **Clone**: value objects are copied freely between the parser and the SDK call
/// - **PartialEq**: two option sets with the same fields are the same options
/// - **Debug**: value objects show up in logs and test failures
/// - **Send + Sync**: parsed requests may be handed to whatever thread runs the SDK call
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Default)]
/// struct ListOptions {
///     page_size: Option<u32>,
/// }
///
/// impl ValueObject for ListOptions {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Send + Sync {}
