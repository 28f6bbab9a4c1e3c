
use crate::{
    BypassCredential, KeyValueStore, MemoryKeyValueStore, Result, SessionError, SessionStore,
};

use std::collections::HashSet;
use std::path::PathBuf;

pub(crate) fn open_memory_store() -> SessionStore<MemoryKeyValueStore> {
    SessionStore::open(MemoryKeyValueStore::new(), Some(BypassCredential::default()))
}

/// Reopen the same storage the way a fresh process would.
pub(crate) fn restart(
    store: SessionStore<MemoryKeyValueStore>,
) -> SessionStore<MemoryKeyValueStore> {
    SessionStore::open(store.into_storage(), Some(BypassCredential::default()))
}

/// Memory storage whose reads or writes fail for selected keys.
#[derive(Debug, Default)]
pub(crate) struct FailingKeyValueStore {
    pub(crate) inner: MemoryKeyValueStore,
    pub(crate) failing_reads: HashSet<&'static str>,
    pub(crate) failing_writes: HashSet<&'static str>,
}

impl FailingKeyValueStore {
    pub(crate) fn new(inner: MemoryKeyValueStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub(crate) fn fail_reads(mut self, key: &'static str) -> Self {
        self.failing_reads.insert(key);
        self
    }

    pub(crate) fn fail_writes(mut self, key: &'static str) -> Self {
        self.failing_writes.insert(key);
        self
    }

    fn io_error() -> std::io::Error {
        std::io::Error::other("injected storage failure")
    }
}

impl KeyValueStore for FailingKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.failing_reads.contains(key) {
            return Err(SessionError::read(PathBuf::from(key), Self::io_error()));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.failing_writes.contains(key) {
            return Err(SessionError::write(PathBuf::from(key), Self::io_error()));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.failing_writes.contains(key) {
            return Err(SessionError::write(PathBuf::from(key), Self::io_error()));
        }
        self.inner.remove(key)
    }
}
