//! Filesystem key-value store: one JSON file per key under the profile dir.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::ports::KeyValueStore;

/// Key-value store writing each key to `<root>/<key>.json`.
///
/// Writes go through a temp file and a rename so a value is replaced as a
/// whole unit; interrupted writes never leave a half-written blob behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_valid_key(key: &str) -> Result<(), AppError> {
        let valid = !key.is_empty()
            && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            && Path::new(key).components().all(|c| matches!(c, Component::Normal(_)));
        if valid {
            Ok(())
        } else {
            Err(AppError::Validation(format!("invalid storage key: {key}")))
        }
    }

    fn value_file(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Self::ensure_valid_key(key)?;
        match fs::read_to_string(self.value_file(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        Self::ensure_valid_key(key)?;
        fs::create_dir_all(&self.root)?;
        let target = self.value_file(key);
        let staging = self.root.join(format!("{key}.json.tmp"));
        fs::write(&staging, value)?;
        fs::rename(&staging, &target)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), AppError> {
        Self::ensure_valid_key(key)?;
        match fs::remove_file(self.value_file(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, JsonFileStore) {
        let dir = TempDir::new().expect("temp dir");
        let store = JsonFileStore::new(dir.path().join("profile"));
        (dir, store)
    }

    #[test]
    fn get_returns_none_before_any_write() {
        let (_dir, store) = store();
        assert_eq!(store.get("history").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let (_dir, store) = store();
        store.set("history", "[1,2,3]").unwrap();
        assert_eq!(store.get("history").unwrap().as_deref(), Some("[1,2,3]"));

        store.set("history", "[]").unwrap();
        assert_eq!(store.get("history").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn delete_is_idempotent() {
        let (_dir, store) = store();
        store.set("presets", "{}").unwrap();
        store.delete("presets").unwrap();
        store.delete("presets").unwrap();
        assert_eq!(store.get("presets").unwrap(), None);
    }

    #[test]
    fn traversal_keys_are_rejected() {
        let (_dir, store) = store();
        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("a/b").is_err());
        assert!(store.delete("").is_err());
    }

    #[test]
    fn no_staging_file_survives_a_write() {
        let (_dir, store) = store();
        store.set("history", "[]").unwrap();
        assert!(!store.root.join("history.json.tmp").exists());
        assert!(store.root.join("history.json").exists());
    }
}
