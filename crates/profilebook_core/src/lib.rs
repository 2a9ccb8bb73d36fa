//! Core domain logic for profilebook.
//! This crate is the single source of truth for record invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod picker;
pub mod storage;
pub mod store;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::profile::{Profile, ProfileField, ProfileId};
pub use picker::{
    apply_selection, FixedImagePicker, ImagePicker, ImageSelection, PickerError, PickerResult,
};
pub use storage::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StorageResult,
};
pub use store::{ProfileStore, StoreError, StoreResult, RECORDS_KEY};
pub use validate::{validate_profile, FieldErrors, DATE_FORMAT_MESSAGE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
