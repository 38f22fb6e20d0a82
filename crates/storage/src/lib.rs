//! Storage adapters: boundary calls → typed storage requests.
//!
//! This crate only translates. The object-storage transport itself is the
//! vendor SDK, reached through the [`StorageCategory`] trait.

pub mod access_level;
pub mod category;
pub mod plugin;
pub mod remove;

pub use access_level::StorageAccessLevel;
pub use category::StorageCategory;
pub use plugin::{StorageCallError, StoragePlugin};
pub use remove::{RemoveOptions, RemoveRequest, RemoveResult};
