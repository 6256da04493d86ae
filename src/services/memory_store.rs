//! In-memory key-value store, the test twin of [`super::JsonFileStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::AppError;
use crate::ports::KeyValueStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    /// When set, every write fails; reads still work.
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the port (for corrupt-data tests).
    pub fn seed(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        if self.fail_writes {
            return Err(AppError::Validation("write refused".to_string()));
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), AppError> {
        if self.fail_writes {
            return Err(AppError::Validation("write refused".to_string()));
        }
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
