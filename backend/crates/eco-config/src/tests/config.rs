use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.storage.dir.as_str(), eq("storage"));
    assert_that!(config.auth.bypass_enabled, eq(true));
    assert_that!(config.auth.bypass_username.as_str(), eq("johndoe"));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Warn));
    assert_that!(config.logging.file, none());
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_from_then_dir_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let config_dir = temp.path().join("nested").join(".eco");

    // When
    let result = Config::load_from(&config_dir);

    // Then
    assert_that!(result, ok(anything()));
    assert!(config_dir.is_dir());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [storage]
              dir = "data"

              [auth]
              bypass_enabled = false

              [logging]
              level = "debug"
              colored = false
              file = "eco.log"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.storage.dir.as_str(), eq("data"));
    assert_that!(config.auth.bypass_enabled, eq(false));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
    assert_eq!(
        config.log_file_path(temp.path()),
        Some(temp.path().join("log").join("eco.log"))
    );
}

#[test]
#[serial]
fn given_partial_toml_when_load_then_missing_fields_default() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[auth]\nbypass_password = \"x\"").unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.bypass_password.as_str(), eq("x"));
    assert_that!(config.auth.bypass_username.as_str(), eq("johndoe"));
    assert_that!(config.storage.dir.as_str(), eq("storage"));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_names_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[storage\ndir = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

// =========================================================================
// Environment Override Tests
// =========================================================================

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[storage]\ndir = \"data\"").unwrap();
    let _dir = EnvGuard::set("ECO_STORAGE_DIR", "other");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.storage.dir.as_str(), eq("other"));
    assert_eq!(config.storage_path(temp.path()), temp.path().join("other"));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _enabled = EnvGuard::set("ECO_AUTH_BYPASS_ENABLED", "0");
    let _user = EnvGuard::set("ECO_AUTH_BYPASS_USERNAME", "admin");
    let _level = EnvGuard::set("ECO_LOG_LEVEL", "TRACE");
    let _colored = EnvGuard::set("ECO_LOG_COLORED", "false");
    let _file = EnvGuard::set("ECO_LOG_FILE", "cli.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.bypass_enabled, eq(false));
    assert_that!(config.auth.bypass_username.as_str(), eq("admin"));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Trace));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), eq(Some("cli.log")));
}

#[test]
#[serial]
fn given_empty_log_file_override_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("ECO_LOG_FILE", "  ");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
