//! Key-value persistence port.

use crate::domain::AppError;

/// String key-value store backing the persisted collections.
///
/// Implementations must replace a value atomically as a whole unit; a failed
/// write leaves the previous value intact.
pub trait KeyValueStore {
    /// Read a value; `None` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Remove a key. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), AppError>;
}
