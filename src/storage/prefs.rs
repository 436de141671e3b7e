//! Dark-mode preference flag.

use super::{KeyValueStore, STORAGE_DARK_MODE};

/// Read the persisted flag. Absent or unrecognized values mean light mode.
pub fn load(store: &impl KeyValueStore) -> bool {
    store.read(STORAGE_DARK_MODE).as_deref() == Some("1")
}

/// Persist the flag as `"1"`/`"0"`.
pub fn save(store: &impl KeyValueStore, dark: bool) {
    store.write(STORAGE_DARK_MODE, if dark { "1" } else { "0" });
}
