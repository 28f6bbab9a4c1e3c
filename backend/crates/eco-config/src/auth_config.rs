use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BYPASS_ENABLED, DEFAULT_BYPASS_PASSWORD,
    DEFAULT_BYPASS_USERNAME,
};

use serde::Deserialize;

/// Reserved login that authenticates without a registry entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub bypass_enabled: bool,
    pub bypass_username: String,
    pub bypass_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bypass_enabled: DEFAULT_BYPASS_ENABLED,
            bypass_username: String::from(DEFAULT_BYPASS_USERNAME),
            bypass_password: String::from(DEFAULT_BYPASS_PASSWORD),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.bypass_enabled && self.bypass_username.is_empty() {
            return Err(ConfigError::auth(
                "auth.bypass_username cannot be empty when auth.bypass_enabled = true",
            ));
        }

        Ok(())
    }
}
