use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension};
use tracing::info;

/// A local key-value mechanism holding whole snapshots under named slots.
///
/// Writes overwrite the previous value of the slot wholesale.
pub trait SnapshotSlots: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> trueka_core::Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> trueka_core::Result<()>;
}

// ── SQLite ─────────────────────────────────────────────────────

/// Snapshot slots kept in a single SQLite table.
pub struct SqliteSlots {
    db: Mutex<Connection>,
}

impl SqliteSlots {
    /// Open or create the slot database at the given path.
    pub fn open(path: &Path) -> trueka_core::Result<Self> {
        info!(?path, "opening snapshot database");

        let conn = Connection::open(path)
            .map_err(|e| trueka_core::TruekaError::Store(e.to_string()))?;

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS slots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            ",
        )
        .map_err(|e| trueka_core::TruekaError::Store(e.to_string()))?;

        Ok(Self {
            db: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for tests).
    pub fn open_in_memory() -> trueka_core::Result<Self> {
        Self::open(Path::new(":memory:"))
    }
}

impl SnapshotSlots for SqliteSlots {
    fn read(&self, key: &str) -> trueka_core::Result<Option<String>> {
        let db = self.db.lock();
        db.query_row(
            "SELECT value FROM slots WHERE key = ?1",
            rusqlite::params![key],
            |row| row.get::<_, String>(0),
        )
        .optional()
        .map_err(|e| trueka_core::TruekaError::Store(e.to_string()))
    }

    fn write(&self, key: &str, value: &str) -> trueka_core::Result<()> {
        let db = self.db.lock();
        let now = chrono::Utc::now().to_rfc3339();
        db.execute(
            "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, value, now],
        )
        .map_err(|e| trueka_core::TruekaError::Store(e.to_string()))?;
        Ok(())
    }
}

// ── In-memory ──────────────────────────────────────────────────

/// Process-local slots. Clones share the same underlying map, so a second
/// store opened on a clone sees what the first one persisted.
#[derive(Clone, Default)]
pub struct MemorySlots {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slots pre-seeded with one value, e.g. a snapshot from a previous session.
    pub fn with_value(key: &str, value: impl Into<String>) -> Self {
        let slots = Self::new();
        slots.slots.lock().insert(key.to_string(), value.into());
        slots
    }

    /// Drop a slot, the external "clear everything" path.
    pub fn clear(&self, key: &str) {
        self.slots.lock().remove(key);
    }
}

impl SnapshotSlots for MemorySlots {
    fn read(&self, key: &str) -> trueka_core::Result<Option<String>> {
        Ok(self.slots.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> trueka_core::Result<()> {
        self.slots.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
