use eco_config::Config;
use eco_session::{BypassCredential, FileKeyValueStore, SessionStore};

use std::path::Path;

use log::debug;

/// The reserved login configured for this install, if enabled.
pub fn bypass_credential(config: &Config) -> Option<BypassCredential> {
    config.auth.bypass_enabled.then(|| {
        BypassCredential::new(
            config.auth.bypass_username.clone(),
            config.auth.bypass_password.clone(),
        )
    })
}

/// Open the file-backed session store described by `config`.
pub fn open_store(config: &Config, config_dir: &Path) -> SessionStore<FileKeyValueStore> {
    let storage_path = config.storage_path(config_dir);
    debug!("Opening session storage at {}", storage_path.display());

    SessionStore::open(FileKeyValueStore::new(storage_path), bypass_credential(config))
}
