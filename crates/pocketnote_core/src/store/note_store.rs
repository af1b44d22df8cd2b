//! Note store over a key-value backend.
//!
//! # Responsibility
//! - Load both collections at process start, tolerating absent or
//!   corrupt persisted values.
//! - Serialize and overwrite the backend entry after each mutation.
//!
//! # Invariants
//! - A corrupt value never aborts the load; the affected collection
//!   falls back to empty and the corruption is reported.
//! - Backend transport errors always propagate to the caller.

use crate::kv::{KeyValueBackend, KvError};
use crate::model::category::CategoryRegistry;
use crate::model::note::Note;
use log::{info, warn};
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Backend key holding the serialized note collection.
pub const NOTES_KEY: &str = "notes";
/// Backend key holding the serialized category labels.
pub const CATEGORIES_KEY: &str = "categories";

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence-boundary failure.
#[derive(Debug)]
pub enum StoreError {
    Kv(KvError),
    Serialize {
        key: &'static str,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kv(err) => write!(f, "{err}"),
            Self::Serialize { key, source } => {
                write!(f, "failed to serialize `{key}` collection: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Kv(err) => Some(err),
            Self::Serialize { source, .. } => Some(source),
        }
    }
}

impl From<KvError> for StoreError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

/// Outcome of a [`NoteStore::load`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Keys whose persisted value was unparsable and got reset to empty.
    pub corrupt_keys: Vec<&'static str>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.corrupt_keys.is_empty()
    }
}

/// Context object owning the canonical collections for the process
/// lifetime. Mutation paths live in the service layer; read paths in the
/// query layer.
pub struct NoteStore<B: KeyValueBackend> {
    backend: B,
    notes: Vec<Note>,
    categories: CategoryRegistry,
}

impl<B: KeyValueBackend> NoteStore<B> {
    /// Creates an empty, not-yet-loaded store over the given backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            notes: Vec::new(),
            categories: CategoryRegistry::new(),
        }
    }

    /// Reads both collections from the backend.
    ///
    /// An absent key yields an empty collection. An unparsable value is
    /// logged, reported in the returned [`LoadReport`], and replaced by
    /// an empty collection; the load itself still succeeds.
    pub fn load(&mut self) -> StoreResult<LoadReport> {
        let mut report = LoadReport::default();
        self.notes = read_collection(&self.backend, NOTES_KEY, &mut report)?;
        self.categories = read_collection(&self.backend, CATEGORIES_KEY, &mut report)?;

        info!(
            "event=store_load module=store status=ok notes={} categories={} corrupt_keys={}",
            self.notes.len(),
            self.categories.len(),
            report.corrupt_keys.len()
        );
        Ok(report)
    }

    /// Serializes the full note collection and overwrites the backend entry.
    pub fn save_notes(&mut self) -> StoreResult<()> {
        write_collection(&mut self.backend, NOTES_KEY, &self.notes)
    }

    /// Serializes the full category list and overwrites the backend entry.
    pub fn save_categories(&mut self) -> StoreResult<()> {
        write_collection(&mut self.backend, CATEGORIES_KEY, &self.categories)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub(crate) fn notes_mut(&mut self) -> &mut Vec<Note> {
        &mut self.notes
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub(crate) fn categories_mut(&mut self) -> &mut CategoryRegistry {
        &mut self.categories
    }

    /// Releases the backend, e.g. to rebuild a store over the same data.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

fn read_collection<B: KeyValueBackend, T: DeserializeOwned + Default>(
    backend: &B,
    key: &'static str,
    report: &mut LoadReport,
) -> StoreResult<T> {
    let Some(raw) = backend.get(key)? else {
        return Ok(T::default());
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(err) => {
            warn!("event=store_load module=store status=corrupt key={key} error={err}");
            report.corrupt_keys.push(key);
            Ok(T::default())
        }
    }
}

fn write_collection<B: KeyValueBackend, T: serde::Serialize>(
    backend: &mut B,
    key: &'static str,
    value: &T,
) -> StoreResult<()> {
    let raw = serde_json::to_string(value)
        .map_err(|source| StoreError::Serialize { key, source })?;
    backend.set(key, &raw)?;
    info!(
        "event=store_save module=store status=ok key={key} bytes={}",
        raw.len()
    );
    Ok(())
}
