use profilebook_core::{
    MemoryKeyValueStore, Profile, ProfileField, ProfileStore, StoreError, RECORDS_KEY,
};
use uuid::Uuid;

fn ada_draft(store: &ProfileStore<&MemoryKeyValueStore>) -> Profile {
    let mut draft = store.begin_create();
    draft.set_field(ProfileField::FirstName, "Ada");
    draft.set_field(ProfileField::LastName, "Lovelace");
    draft.set_field(ProfileField::DateOfBirth, "1815-12-10");
    draft.set_field(ProfileField::Nationality, "British");
    draft.set_field(ProfileField::ShortBio, "Mathematician.");
    draft.picture = None;
    draft
}

fn persisted_records(adapter: &MemoryKeyValueStore) -> Vec<Profile> {
    use profilebook_core::KeyValueStore;
    let bytes = adapter
        .load(RECORDS_KEY)
        .unwrap()
        .expect("record list should be persisted");
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn initialize_seeds_default_on_first_run() {
    let adapter = MemoryKeyValueStore::new();
    let store = ProfileStore::new(&adapter);

    store.initialize().unwrap();

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].first_name, "John");
    assert_eq!(records[0].last_name, "Doe");
    assert_eq!(store.selected().unwrap(), records[0]);
}

#[test]
fn initialize_is_idempotent_before_any_mutation() {
    let adapter = MemoryKeyValueStore::new();
    let store = ProfileStore::new(&adapter);

    store.initialize().unwrap();
    store.initialize().unwrap();

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].display_name(), "John Doe");
    assert_eq!(store.selected().unwrap(), records[0]);
}

#[test]
fn initialize_reloads_the_persisted_copy_after_mutations() {
    let adapter = MemoryKeyValueStore::new();
    let store = ProfileStore::new(&adapter);
    store.initialize().unwrap();
    store.commit_create(ada_draft(&store)).unwrap();
    let before = store.records();

    store.initialize().unwrap();

    // Identities survive the reload because the list was persisted.
    assert_eq!(store.records(), before);
    assert_eq!(store.selected().unwrap(), before[0]);
}

#[test]
fn begin_create_returns_fresh_drafts_without_mutating() {
    let adapter = MemoryKeyValueStore::new();
    let store = ProfileStore::new(&adapter);
    store.initialize().unwrap();

    let first = store.begin_create();
    let second = store.begin_create();

    assert_ne!(first.uuid, second.uuid);
    assert_eq!(first.first_name, "John");
    assert_eq!(store.len(), 1);
    use profilebook_core::KeyValueStore;
    assert!(adapter.load(RECORDS_KEY).unwrap().is_none());
}

#[test]
fn begin_edit_returns_a_copy_not_a_view() {
    let adapter = MemoryKeyValueStore::new();
    let store = ProfileStore::new(&adapter);
    store.initialize().unwrap();
    let target = store.selected().unwrap();

    let mut draft = store.begin_edit(target.uuid).unwrap();
    draft.set_field(ProfileField::Nationality, "Canadian");

    assert_eq!(store.records()[0].nationality, "American");
}

#[test]
fn begin_edit_unknown_id_returns_not_found() {
    let adapter = MemoryKeyValueStore::new();
    let store = ProfileStore::new(&adapter);
    store.initialize().unwrap();

    let missing = Uuid::new_v4();
    let err = store.begin_edit(missing).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
}

#[test]
fn commit_create_appends_selects_and_persists() {
    let adapter = MemoryKeyValueStore::new();
    let store = ProfileStore::new(&adapter);
    store.initialize().unwrap();

    let draft = ada_draft(&store);
    let draft_id = draft.uuid;
    store.commit_create(draft).unwrap();

    let records = store.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].uuid, draft_id);
    assert_eq!(records[1].display_name(), "Ada Lovelace");
    assert!(records[1].picture.is_none());
    assert_eq!(store.selected().unwrap(), records[1]);
    assert_eq!(persisted_records(&adapter), records);
}

#[test]
fn commit_edit_replaces_in_place_and_keeps_other_fields() {
    let adapter = MemoryKeyValueStore::new();
    let store = ProfileStore::new(&adapter);
    store.initialize().unwrap();
    store.commit_create(ada_draft(&store)).unwrap();
    let original = store.records();
    let target = original[1].clone();

    let mut draft = store.begin_edit(target.uuid).unwrap();
    draft.set_field(ProfileField::Nationality, "French");
    store.commit_edit(draft).unwrap();

    let records = store.records();
    assert_eq!(records.len(), original.len());
    assert_eq!(records[0], original[0]);
    assert_eq!(records[1].uuid, target.uuid);
    assert_eq!(records[1].nationality, "French");
    assert_eq!(records[1].first_name, target.first_name);
    assert_eq!(records[1].last_name, target.last_name);
    assert_eq!(records[1].date_of_birth, target.date_of_birth);
    assert_eq!(records[1].short_bio, target.short_bio);
    assert_eq!(store.selected().unwrap(), records[1]);
    assert_eq!(persisted_records(&adapter), records);
}

#[test]
fn commit_edit_unknown_id_returns_not_found() {
    let adapter = MemoryKeyValueStore::new();
    let store = ProfileStore::new(&adapter);
    store.initialize().unwrap();

    let stray = ada_draft(&store);
    let err = store.commit_edit(stray.clone()).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == stray.uuid));
    assert_eq!(store.len(), 1);
}

#[test]
fn select_switches_the_selected_record() {
    let adapter = MemoryKeyValueStore::new();
    let store = ProfileStore::new(&adapter);
    store.initialize().unwrap();
    store.commit_create(ada_draft(&store)).unwrap();
    let records = store.records();

    store.select(records[0].uuid).unwrap();
    assert_eq!(store.selected().unwrap(), records[0]);

    // Selection is transient: the persisted copy is untouched by select.
    assert_eq!(persisted_records(&adapter), records);
}

#[test]
fn select_unknown_id_returns_not_found() {
    let adapter = MemoryKeyValueStore::new();
    let store = ProfileStore::new(&adapter);
    store.initialize().unwrap();

    let missing = Uuid::new_v4();
    let err = store.select(missing).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
}

#[test]
fn delete_selected_falls_back_to_first_remaining() {
    let adapter = MemoryKeyValueStore::new();
    let store = ProfileStore::new(&adapter);
    store.initialize().unwrap();
    store.commit_create(ada_draft(&store)).unwrap();
    let first = store.records()[0].clone();

    // The freshly created record is selected; deleting it falls back.
    store.delete_selected().unwrap();

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], first);
    assert_eq!(store.selected().unwrap(), first);
    assert_eq!(persisted_records(&adapter), records);
}

#[test]
fn deleting_the_last_record_leaves_a_transient_placeholder() {
    let adapter = MemoryKeyValueStore::new();
    let store = ProfileStore::new(&adapter);
    store.initialize().unwrap();

    store.delete_selected().unwrap();

    assert!(store.is_empty());
    let placeholder = store.selected().expect("placeholder should be selected");
    assert_eq!(placeholder.display_name(), "John Doe");
    assert!(store.records().iter().all(|r| r.uuid != placeholder.uuid));
    assert!(persisted_records(&adapter).is_empty());
}

#[test]
fn delete_without_initialize_returns_no_selection() {
    let adapter = MemoryKeyValueStore::new();
    let store = ProfileStore::new(&adapter);

    let err = store.delete_selected().unwrap_err();
    assert!(matches!(err, StoreError::NoSelection));
}

#[test]
fn delete_with_placeholder_selection_returns_no_selection() {
    let adapter = MemoryKeyValueStore::new();
    let store = ProfileStore::new(&adapter);
    store.initialize().unwrap();
    store.delete_selected().unwrap();

    // Only the placeholder is showing; there is nothing left to delete.
    let err = store.delete_selected().unwrap_err();
    assert!(matches!(err, StoreError::NoSelection));
    assert!(persisted_records(&adapter).is_empty());
}
