use crate::{KeyValueStore, Result, SessionError, storage::validate_key};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use log::debug;

const FILE_EXTENSION: &str = "json";

/// One file per key at `<dir>/<key>.json`.
///
/// The directory is created on the first write, so opening a store over a
/// directory that does not exist yet behaves like an empty store.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding `key`.
    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{FILE_EXTENSION}")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::read(path, e)),
        }
    }

    /// Atomic write: temp file, fsync, then rename over the final path.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let final_path = self.key_path(key)?;

        fs::create_dir_all(&self.dir).map_err(|e| SessionError::write(self.dir.clone(), e))?;

        let temp_path = self
            .dir
            .join(format!("{key}.{FILE_EXTENSION}.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| SessionError::write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::write(final_path.clone(), e)
        })?;

        debug!("Wrote storage key '{key}' to {}", final_path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed storage key '{key}'");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::write(path, e)),
        }
    }
}
