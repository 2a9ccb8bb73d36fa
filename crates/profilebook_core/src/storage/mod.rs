//! Persistence adapter contracts and implementations.
//!
//! # Responsibility
//! - Define the key-value seam the record store persists through.
//! - Keep backend transport details out of store logic.
//!
//! # Invariants
//! - `load` distinguishes "never written" (`Ok(None)`) from transport
//!   failure (`Err`).
//! - Adapters store the value bytes verbatim; interpretation belongs to
//!   the caller.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level failure of a persistence adapter.
#[derive(Debug)]
pub enum StorageError {
    /// SQLite-backed adapter failure.
    Db(DbError),
    /// Any other backend failure, described for diagnostics.
    Backend(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "storage backend error: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable key-value store consumed by the record store.
pub trait KeyValueStore {
    /// Loads the bytes stored under `key`, or `None` when the key has
    /// never been written.
    fn load(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Durably stores `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &[u8]) -> StorageResult<()>;
}

impl<S: KeyValueStore> KeyValueStore for &S {
    fn load(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        (**self).save(key, value)
    }
}
