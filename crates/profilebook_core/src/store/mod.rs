//! Record store and its error taxonomy.
//!
//! # Responsibility
//! - Orchestrate validation, in-memory mutation and persistence into
//!   use-case level APIs.
//! - Keep presentation layers decoupled from storage details.

use crate::model::profile::ProfileId;
use crate::storage::StorageError;
use crate::validate::FieldErrors;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod profile_store;

pub use profile_store::{ProfileStore, RECORDS_KEY};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a record store operation.
#[derive(Debug)]
pub enum StoreError {
    /// The candidate failed field validation; the mapping carries one
    /// message per offending field and no mutation has happened.
    Validation(FieldErrors),
    /// The target record is not present in the list.
    NotFound(ProfileId),
    /// A delete was requested while nothing in the list is selected.
    NoSelection,
    /// The persistence adapter failed. For commits the in-memory mutation
    /// has already been applied and is not rolled back.
    Persistence(StorageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => {
                write!(f, "validation failed for {} field(s)", errors.len())
            }
            Self::NotFound(id) => write!(f, "profile not found: {id}"),
            Self::NoSelection => write!(f, "no profile is selected"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persistence(err) => Some(err),
            Self::Validation(_) | Self::NotFound(_) | Self::NoSelection => None,
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Persistence(value)
    }
}
