//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `profilebook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use profilebook_core::{MemoryKeyValueStore, ProfileStore};

fn main() {
    println!("profilebook_core version={}", profilebook_core::core_version());

    let store = ProfileStore::new(MemoryKeyValueStore::new());
    match store.initialize() {
        Ok(()) => {
            let selected = store
                .selected()
                .map(|profile| profile.display_name())
                .unwrap_or_else(|| "none".to_string());
            println!(
                "profilebook_core records={} selected={selected}",
                store.len()
            );
        }
        Err(err) => eprintln!("profilebook_core init failed: {err}"),
    }
}
