//! Key-value persistence backends.
//!
//! # Responsibility
//! - Define the string key-value contract the note store mirrors into.
//! - Keep backend transport failures separate from domain errors.
//!
//! # Invariants
//! - Values are full-collection snapshots; `set` always overwrites.
//! - Backends never interpret the stored text.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

pub type KvResult<T> = Result<T, KvError>;

/// Transport-level backend failure.
#[derive(Debug)]
pub enum KvError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// String key-value store contract.
///
/// The note store uses exactly two logical keys (`notes`, `categories`);
/// implementations must not assume anything beyond get/overwrite
/// semantics. Write failures (quota, locked file) surface as `KvError`
/// and are reported to the caller, never swallowed.
pub trait KeyValueBackend {
    fn get(&self, key: &str) -> KvResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> KvResult<()>;
}
