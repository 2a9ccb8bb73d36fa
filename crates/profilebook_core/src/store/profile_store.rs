//! Profile record store.
//!
//! # Responsibility
//! - Own the canonical in-memory record list and the current selection.
//! - Keep the persisted copy equal to memory after every successful
//!   create/edit/delete.
//!
//! # Invariants
//! - Mutations are single-writer: the state lock is held across the whole
//!   read-modify-write, including the adapter save.
//! - `Selection::Stored` always references a record present in the list.
//! - The selection placeholder is never inserted into the list or written
//!   to storage.
//! - A failed save surfaces `StoreError::Persistence` without rolling back
//!   the in-memory mutation; the next successful save rewrites the full
//!   list and converges storage.

use crate::model::profile::{Profile, ProfileId};
use crate::storage::{KeyValueStore, StorageError};
use crate::store::{StoreError, StoreResult};
use crate::validate::validate_profile;
use log::{info, warn};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Fixed adapter key the serialized record list lives under.
pub const RECORDS_KEY: &str = "profiles";

/// Current selection state.
///
/// `Placeholder` carries the transient record shown while the list is
/// empty; it is display state only and has no storage counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    None,
    Stored(ProfileId),
    Placeholder(Profile),
}

#[derive(Debug)]
struct StoreState {
    records: Vec<Profile>,
    selection: Selection,
}

/// Record store over a key-value persistence adapter.
///
/// Insertion order of `records` is significant: it is the display order
/// and determines the first-remaining fallback after a delete.
pub struct ProfileStore<S: KeyValueStore> {
    adapter: S,
    state: Mutex<StoreState>,
}

impl<S: KeyValueStore> ProfileStore<S> {
    /// Creates a store that persists through `adapter`.
    ///
    /// The store is empty and nothing is selected until `initialize`.
    pub fn new(adapter: S) -> Self {
        Self {
            adapter,
            state: Mutex::new(StoreState {
                records: Vec::new(),
                selection: Selection::None,
            }),
        }
    }

    /// Loads the persisted record list, seeding on first run.
    ///
    /// # Contract
    /// - Absent or unparseable data seeds one built-in default record.
    /// - Selection becomes the first record, or the transient placeholder
    ///   when the persisted list is empty.
    /// - Idempotent: re-running re-loads and converges to the same
    ///   observable state.
    ///
    /// # Errors
    /// - Adapter transport failure propagates as `Persistence` and leaves
    ///   the store uninitialized; the call may simply be retried.
    pub fn initialize(&self) -> StoreResult<()> {
        let mut state = self.lock_state();

        let records = match self.adapter.load(RECORDS_KEY)? {
            Some(bytes) => match serde_json::from_slice::<Vec<Profile>>(&bytes) {
                Ok(records) => records,
                Err(err) => {
                    warn!(
                        "event=store_init module=store status=seed reason=unparseable error={err}"
                    );
                    vec![Profile::builtin_default()]
                }
            },
            None => {
                info!("event=store_init module=store status=seed reason=absent");
                vec![Profile::builtin_default()]
            }
        };

        state.selection = match records.first() {
            Some(first) => Selection::Stored(first.uuid),
            None => Selection::Placeholder(Profile::selection_placeholder()),
        };
        state.records = records;

        info!(
            "event=store_init module=store status=ok records={}",
            state.records.len()
        );
        Ok(())
    }

    /// Returns a fresh create draft with the built-in default values.
    ///
    /// The draft has its own new identity and is not a copy of any
    /// existing record; store state is untouched until `commit_create`.
    pub fn begin_create(&self) -> Profile {
        Profile::builtin_default()
    }

    /// Returns an editable copy of the record with `id`.
    ///
    /// Store state is untouched until `commit_edit`.
    pub fn begin_edit(&self, id: ProfileId) -> StoreResult<Profile> {
        let state = self.lock_state();
        state
            .records
            .iter()
            .find(|record| record.uuid == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Validates and appends `draft`, selecting it and persisting the list.
    ///
    /// # Errors
    /// - `Validation` with the full field-error mapping; no mutation, no
    ///   write.
    /// - `Persistence` after the in-memory append (not rolled back).
    pub fn commit_create(&self, draft: Profile) -> StoreResult<()> {
        let errors = validate_profile(&draft);
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        let mut state = self.lock_state();
        let id = draft.uuid;
        state.records.push(draft);
        state.selection = Selection::Stored(id);

        info!(
            "event=commit_create module=store status=ok id={id} records={}",
            state.records.len()
        );
        self.persist(&state)
    }

    /// Validates `draft` and replaces the record sharing its identity,
    /// selecting it and persisting the list.
    ///
    /// The replacement is in place: list length and position are
    /// preserved.
    ///
    /// # Errors
    /// - `Validation` with the full field-error mapping; no mutation, no
    ///   write.
    /// - `NotFound` when no record carries the draft's identity.
    /// - `Persistence` after the in-memory replacement (not rolled back).
    pub fn commit_edit(&self, draft: Profile) -> StoreResult<()> {
        let errors = validate_profile(&draft);
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        let mut state = self.lock_state();
        let id = draft.uuid;
        let position = state
            .records
            .iter()
            .position(|record| record.uuid == id)
            .ok_or(StoreError::NotFound(id))?;
        state.records[position] = draft;
        state.selection = Selection::Stored(id);

        info!("event=commit_edit module=store status=ok id={id} position={position}");
        self.persist(&state)
    }

    /// Removes the selected record and persists the shrunk list.
    ///
    /// Selection falls back to the first remaining record, or to the
    /// transient placeholder when the list empties.
    ///
    /// # Errors
    /// - `NoSelection` when nothing in the list is selected (store not
    ///   initialized, or only the placeholder is showing).
    /// - `Persistence` after the in-memory removal (not rolled back).
    pub fn delete_selected(&self) -> StoreResult<()> {
        let mut state = self.lock_state();

        let id = match &state.selection {
            Selection::Stored(id) => *id,
            Selection::None | Selection::Placeholder(_) => {
                return Err(StoreError::NoSelection);
            }
        };

        let position = state
            .records
            .iter()
            .position(|record| record.uuid == id)
            .ok_or(StoreError::NotFound(id))?;
        state.records.remove(position);
        state.selection = match state.records.first() {
            Some(first) => Selection::Stored(first.uuid),
            None => Selection::Placeholder(Profile::selection_placeholder()),
        };

        info!(
            "event=store_delete module=store status=ok id={id} records={}",
            state.records.len()
        );
        self.persist(&state)
    }

    /// Selects the record with `id`. Memory-only, never persisted.
    pub fn select(&self, id: ProfileId) -> StoreResult<()> {
        let mut state = self.lock_state();
        if !state.records.iter().any(|record| record.uuid == id) {
            return Err(StoreError::NotFound(id));
        }
        state.selection = Selection::Stored(id);
        Ok(())
    }

    /// Snapshot of the record list in display order.
    pub fn records(&self) -> Vec<Profile> {
        self.lock_state().records.clone()
    }

    /// Snapshot of the selected record, if any.
    ///
    /// Returns the transient placeholder while the list is empty after a
    /// delete; `None` only before `initialize`.
    pub fn selected(&self) -> Option<Profile> {
        let state = self.lock_state();
        match &state.selection {
            Selection::None => None,
            Selection::Stored(id) => state
                .records
                .iter()
                .find(|record| record.uuid == *id)
                .cloned(),
            Selection::Placeholder(placeholder) => Some(placeholder.clone()),
        }
    }

    /// Number of records in the list.
    pub fn len(&self) -> usize {
        self.lock_state().records.len()
    }

    /// Whether the record list is empty.
    pub fn is_empty(&self) -> bool {
        self.lock_state().records.is_empty()
    }

    fn lock_state(&self) -> MutexGuard<'_, StoreState> {
        // Every mutation path leaves the state consistent even on an early
        // return, so a poisoned guard is still safe to hand out.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, state: &StoreState) -> StoreResult<()> {
        let bytes = serde_json::to_vec(&state.records).map_err(|err| {
            StoreError::Persistence(StorageError::Backend(format!(
                "serialize record list: {err}"
            )))
        })?;

        if let Err(err) = self.adapter.save(RECORDS_KEY, &bytes) {
            warn!(
                "event=store_save module=store status=error records={} error={err}",
                state.records.len()
            );
            return Err(StoreError::Persistence(err));
        }

        Ok(())
    }
}
