//! Prompt/answer history storage and management.

use serde::{Deserialize, Serialize};

use super::{KeyValueStore, STORAGE_HISTORY};

const MAX_ENTRIES: usize = 50;

/// A single saved interaction, newest entries first in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub prompt: String,
    pub answer: String,
    pub timestamp: u64,
}

/// Load history entries. A missing key or unreadable payload yields an
/// empty list.
pub fn load(store: &impl KeyValueStore) -> Vec<HistoryEntry> {
    let Some(raw) = store.read(STORAGE_HISTORY) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("discarding unreadable history: {err}");
            Vec::new()
        }
    }
}

/// Persist at most the first MAX_ENTRIES entries, replacing prior content.
pub fn save(store: &impl KeyValueStore, entries: &[HistoryEntry]) {
    let capped = &entries[..entries.len().min(MAX_ENTRIES)];
    match serde_json::to_string(capped) {
        Ok(raw) => store.write(STORAGE_HISTORY, &raw),
        Err(err) => log::warn!("failed to serialize history: {err}"),
    }
}

/// Add an entry to the history (at the beginning), enforcing max entries.
pub fn push(entries: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
    entries.insert(0, entry);
    entries.truncate(MAX_ENTRIES);
}

/// Drop all persisted history.
pub fn clear(store: &impl KeyValueStore) {
    store.delete(STORAGE_HISTORY);
}

#[cfg(test)]
mod tests {
    use super::super::memory::MemoryStore;
    use super::*;

    fn entry(n: u64) -> HistoryEntry {
        HistoryEntry {
            prompt: format!("prompt {n}"),
            answer: format!("answer {n}"),
            timestamp: n,
        }
    }

    #[test]
    fn test_push_inserts_newest_first() {
        let mut entries = Vec::new();
        push(&mut entries, entry(1));
        push(&mut entries, entry(2));
        assert_eq!(entries[0].prompt, "prompt 2");
        assert_eq!(entries[1].prompt, "prompt 1");
    }

    #[test]
    fn test_push_caps_at_fifty() {
        let mut entries = Vec::new();
        for n in 0..120 {
            push(&mut entries, entry(n));
        }
        assert_eq!(entries.len(), 50);
        assert_eq!(entries[0].timestamp, 119);
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = MemoryStore::default();
        let entries: Vec<_> = (0..3).map(entry).collect();
        save(&store, &entries);
        assert_eq!(load(&store), entries);
    }

    #[test]
    fn test_save_truncates_to_cap() {
        let store = MemoryStore::default();
        let entries: Vec<_> = (0..80).map(entry).collect();
        save(&store, &entries);
        let loaded = load(&store);
        assert_eq!(loaded.len(), 50);
        assert_eq!(loaded[..], entries[..50]);
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = MemoryStore::default();
        assert!(load(&store).is_empty());
    }

    #[test]
    fn test_load_corrupted_payload_is_empty() {
        let store = MemoryStore::default();
        store.write(STORAGE_HISTORY, "{not json");
        assert!(load(&store).is_empty());
    }

    #[test]
    fn test_clear_removes_persisted_history() {
        let store = MemoryStore::default();
        save(&store, &[entry(1)]);
        clear(&store);
        assert!(load(&store).is_empty());
    }
}
