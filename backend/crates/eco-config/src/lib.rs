mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

pub const CONFIG_DIR_ENV: &str = "ECO_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".eco";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_DIR: &str = "storage";
const DEFAULT_BYPASS_ENABLED: bool = true;
const DEFAULT_BYPASS_USERNAME: &str = "johndoe";
const DEFAULT_BYPASS_PASSWORD: &str = "johndoe";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";
