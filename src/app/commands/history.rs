//! History subcommands over the storage gateway.

use crate::domain::HistoryEntry;
use crate::ports::KeyValueStore;
use crate::services::ProfileStore;

pub fn list<S: KeyValueStore>(profile: &ProfileStore<S>) -> Vec<HistoryEntry> {
    profile.load_history()
}

pub fn clear<S: KeyValueStore>(profile: &ProfileStore<S>) {
    profile.clear_history();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryStore;

    #[test]
    fn list_and_clear_round_trip() {
        let profile = ProfileStore::new(MemoryStore::new());
        profile.save_history(&[HistoryEntry { text: "kept".into(), time: "t".into() }]);
        assert_eq!(list(&profile).len(), 1);
        clear(&profile);
        assert!(list(&profile).is_empty());
    }
}
