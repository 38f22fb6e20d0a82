use serde::{Deserialize, Serialize};

/// Visibility scope of a stored object.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StorageAccessLevel {
    /// Readable by every user of the app.
    Public,
    /// Readable by every user, writable only by the owner.
    Protected,
    /// Readable and writable only by the owner.
    Private,
}

impl StorageAccessLevel {
    pub const ALL: [StorageAccessLevel; 3] = [
        StorageAccessLevel::Public,
        StorageAccessLevel::Protected,
        StorageAccessLevel::Private,
    ];

    /// Canonical (upper-case) name.
    pub fn name(self) -> &'static str {
        match self {
            StorageAccessLevel::Public => "PUBLIC",
            StorageAccessLevel::Protected => "PROTECTED",
            StorageAccessLevel::Private => "PRIVATE",
        }
    }

    /// Case-insensitive lookup by name; `None` when nothing matches.
    ///
    /// The input is upper-cased with the locale-independent Unicode mapping
    /// before comparing, so `"private"`, `"Private"` and `"PRIVATE"` all match.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        let upper = value.to_uppercase();
        Self::ALL.into_iter().find(|level| level.name() == upper)
    }
}

impl core::fmt::Display for StorageAccessLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
