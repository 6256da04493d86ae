//! Storage gateway for the persisted collections.
//!
//! History and presets are serialized as whole JSON blobs over the key-value
//! port. Reads treat corrupt or missing data as empty; writes are best-effort
//! so a storage failure never takes down the session.

use crate::domain::{HistoryEntry, Preset};
use crate::ports::KeyValueStore;

const HISTORY_KEY: &str = "history";
const PRESETS_KEY: &str = "presets";

pub struct ProfileStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load_history(&self) -> Vec<HistoryEntry> {
        self.load_collection(HISTORY_KEY)
    }

    pub fn save_history(&self, entries: &[HistoryEntry]) {
        self.save_collection(HISTORY_KEY, entries);
    }

    pub fn clear_history(&self) {
        if let Err(err) = self.store.delete(HISTORY_KEY) {
            eprintln!("Failed to clear stored history: {err}");
        }
    }

    pub fn load_presets(&self) -> Vec<Preset> {
        self.load_collection(PRESETS_KEY)
    }

    pub fn save_presets(&self, presets: &[Preset]) {
        self.save_collection(PRESETS_KEY, presets);
    }

    fn load_collection<T: serde::de::DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                eprintln!("Failed to read stored {key}: {err}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(err) => {
                eprintln!("Ignoring corrupt stored {key}: {err}");
                Vec::new()
            }
        }
    }

    fn save_collection<T: serde::Serialize>(&self, key: &str, values: &[T]) {
        let raw = match serde_json::to_string(values) {
            Ok(raw) => raw,
            Err(err) => {
                eprintln!("Failed to serialize {key}: {err}");
                return;
            }
        };
        if let Err(err) = self.store.set(key, &raw) {
            eprintln!("Failed to persist {key}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PresetState;
    use crate::services::MemoryStore;

    #[test]
    fn missing_blobs_read_as_empty() {
        let store = ProfileStore::new(MemoryStore::new());
        assert!(store.load_history().is_empty());
        assert!(store.load_presets().is_empty());
    }

    #[test]
    fn corrupt_blobs_read_as_empty() {
        let kv = MemoryStore::new();
        kv.seed(HISTORY_KEY, "{not json");
        kv.seed(PRESETS_KEY, "[{\"id\": 7}]");
        let store = ProfileStore::new(kv);
        assert!(store.load_history().is_empty());
        assert!(store.load_presets().is_empty());
    }

    #[test]
    fn history_round_trips() {
        let store = ProfileStore::new(MemoryStore::new());
        let entries = vec![
            HistoryEntry { text: "sunset pier".into(), time: "01/02/26 10:30".into() },
            HistoryEntry { text: "misty forest".into(), time: "01/02/26 10:15".into() },
        ];
        store.save_history(&entries);
        assert_eq!(store.load_history(), entries);

        store.clear_history();
        assert!(store.load_history().is_empty());
    }

    #[test]
    fn presets_round_trip() {
        let store = ProfileStore::new(MemoryStore::new());
        let presets =
            vec![Preset { id: "1700000000000".into(), name: "noir".into(), state: PresetState::default() }];
        store.save_presets(&presets);
        assert_eq!(store.load_presets(), presets);
    }

    #[test]
    fn failed_writes_leave_prior_data_intact() {
        let kv = MemoryStore::new();
        kv.seed(HISTORY_KEY, r#"[{"text":"kept","time":"t"}]"#);
        let mut kv = kv;
        kv.fail_writes = true;
        let store = ProfileStore::new(kv);

        store.save_history(&[HistoryEntry { text: "lost".into(), time: "t".into() }]);
        assert_eq!(store.load_history()[0].text, "kept");
    }
}
