pub mod file_key_value_store;
pub mod memory_key_value_store;

use crate::{Result, SessionError};

/// Durable string key-value storage backing the session store.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when the key has never been written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the whole value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Keys are restricted to ASCII alphanumerics, `-` and `_`.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(SessionError::invalid_key(key, "key cannot be empty"));
    }

    if let Some(c) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(SessionError::invalid_key(
            key,
            format!("character {c:?} is not allowed"),
        ));
    }

    Ok(())
}
