//! Centralized storage module for localStorage operations.

use gloo_storage::{LocalStorage, Storage};

pub mod history;
pub mod prefs;

// Storage keys
pub const STORAGE_DARK_MODE: &str = "bookrec.dark_mode";
pub const STORAGE_HISTORY: &str = "bookrec.history";

/// Minimal key-value capability over persistent storage, so the stores can
/// run against an in-memory map in tests.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// localStorage-backed store. Values are raw strings, not JSON-wrapped, so
/// the dark flag persists as exactly `"1"`/`"0"` and the history as a plain
/// JSON array.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        let _ = LocalStorage::raw().set_item(key, value);
    }

    fn delete(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// Get current timestamp in milliseconds using js_sys::Date
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::KeyValueStore;

    /// In-memory stand-in for localStorage used by the store tests.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn delete(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }
}
