//! SQLite-backed key-value adapter.
//!
//! # Responsibility
//! - Persist opaque blobs in the `kv` table behind the adapter contract.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - The connection has migrations applied (`db::open_db*`).
//! - `save` upserts; a key is written at most once per row.

use crate::storage::{KeyValueStore, StorageResult};
use rusqlite::{params, Connection};

/// Durable adapter over a prepared SQLite connection.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn load(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }

        Ok(None)
    }

    fn save(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;

        Ok(())
    }
}
