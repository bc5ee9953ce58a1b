//! Key-value persistence boundary.
//!
//! # Responsibility
//! - Define the injected `KeyValueStore` contract (get/set/remove by key).
//! - Name the fixed storage keys shared by every controller.
//! - Provide lenient list/record codecs over raw stored strings.
//!
//! # Invariants
//! - Stored values are UTF-8 JSON text; the store itself never parses them.
//! - Backend I/O failures surface as `StoreError`; decode failures never do.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod codec;
mod memory;
mod sqlite;

pub use codec::{read_list, read_record, remove_record, write_list, write_record};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by store backends and record encoding.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    /// The database file carries a schema version newer than this build.
    SchemaTooNew { found: u32, supported: u32 },
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "database schema version {found} is newer than supported {supported}"
            ),
            Self::Encode(err) => write!(f, "failed to encode stored value: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Raw string key-value storage, modeled after browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// The five fixed logical keys of the persisted layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    SessionUser,
    ProgressEntries,
    AssessmentEntries,
    CompanyProfile,
    FeedbackEntries,
}

impl StorageKey {
    pub const ALL: [StorageKey; 5] = [
        Self::SessionUser,
        Self::ProgressEntries,
        Self::AssessmentEntries,
        Self::CompanyProfile,
        Self::FeedbackEntries,
    ];

    /// Physical key string, shared with existing browser-stored data.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SessionUser => "ie_session_user",
            Self::ProgressEntries => "ie_progress_entries",
            Self::AssessmentEntries => "ie_assessment_entries",
            Self::CompanyProfile => "ie_company_profile",
            Self::FeedbackEntries => "ie_feedback_entries",
        }
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::StorageKey;
    use std::collections::HashSet;

    #[test]
    fn storage_keys_are_distinct_and_prefixed() {
        let keys = StorageKey::ALL
            .iter()
            .map(|key| key.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(keys.len(), StorageKey::ALL.len());
        assert!(keys.iter().all(|key| key.starts_with("ie_")));
    }
}
