//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Persist collection snapshots durably in a single `kv` table.
//! - Bootstrap the schema via `PRAGMA user_version` before first use.
//!
//! # Invariants
//! - Returned backends have the schema fully applied.
//! - `set` overwrites the previous value for a key in one statement.

use super::{KeyValueBackend, KvError, KvResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

const SCHEMA_VERSION: u32 = 1;
const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);";

/// Durable single-file backend.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Opens (or creates) a store file and applies the schema.
    ///
    /// # Side effects
    /// - Emits `kv_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> KvResult<Self> {
        Self::open_with("file", || Connection::open(path).map_err(KvError::from))
    }

    /// Opens an in-memory store, mostly useful for local experiments.
    pub fn open_in_memory() -> KvResult<Self> {
        Self::open_with("memory", || {
            Connection::open_in_memory().map_err(KvError::from)
        })
    }

    fn open_with(
        mode: &str,
        connect: impl FnOnce() -> KvResult<Connection>,
    ) -> KvResult<Self> {
        let started_at = Instant::now();
        info!("event=kv_open module=kv status=start mode={mode}");

        let result = connect().and_then(|conn| {
            bootstrap(&conn)?;
            Ok(Self { conn })
        });

        match &result {
            Ok(_) => info!(
                "event=kv_open module=kv status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=kv_open module=kv status=error mode={mode} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }

        result
    }
}

impl KeyValueBackend for SqliteBackend {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> KvResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}

fn bootstrap(conn: &Connection) -> KvResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;

    let db_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if db_version > SCHEMA_VERSION {
        return Err(KvError::UnsupportedSchemaVersion {
            db_version,
            latest_supported: SCHEMA_VERSION,
        });
    }
    if db_version < SCHEMA_VERSION {
        conn.execute_batch(SCHEMA_SQL)?;
        conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    }

    Ok(())
}
