//! Configuration Loader Tests

use std::env;
use std::path::PathBuf;

use extreg_infrastructure::config::{AppConfig, ConfigLoader};
use extreg_infrastructure::constants::{CONFIG_ENV_PREFIX, DEFAULT_LOG_LEVEL, LOG_MAX_FILES};
use tempfile::TempDir;

/// Helper to set env var
fn set_env(key: &str, value: &str) {
    // SAFETY: every test uses its own variable names
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var
fn remove_env(key: &str) {
    // SAFETY: every test uses its own variable names
    unsafe {
        env::remove_var(key);
    }
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("extreg.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(!config.logging.json_format);
    assert!(config.logging.file_output.is_none());
    assert_eq!(config.logging.max_files, LOG_MAX_FILES);
    assert!(config.discovery.embedded);
    assert!(config.discovery.search_paths.is_empty());
}

#[test]
fn test_loader_default_prefix() {
    let loader = ConfigLoader::new();

    assert_eq!(loader.env_prefix(), CONFIG_ENV_PREFIX);
    assert!(loader.config_path().is_none());
}

#[test]
fn test_load_from_toml_file() {
    let temp_dir = TempDir::new().unwrap();
    let search_path = temp_dir.path().join("plugins");
    std::fs::create_dir(&search_path).unwrap();
    let config_path = write_config(
        &temp_dir,
        &format!(
            "[logging]\nlevel = \"debug\"\njson_format = true\n\n[discovery]\nembedded = false\nsearch_paths = [{:?}]\n",
            search_path.display().to_string()
        ),
    );

    let config = ConfigLoader::new()
        .with_env_prefix("EXTREG_TEST_TOML")
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
    assert!(!config.discovery.embedded);
    assert_eq!(config.discovery.search_paths, vec![search_path]);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(&temp_dir, "[logging]\nlevel = \"warn\"\n");

    let config = ConfigLoader::new()
        .with_env_prefix("EXTREG_TEST_PARTIAL")
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.discovery, AppConfig::default().discovery);
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let config = ConfigLoader::new()
        .with_env_prefix("EXTREG_TEST_MISSING")
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load()
        .unwrap();

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(&temp_dir, "[logging]\nlevel = \"warn\"\n");

    set_env("EXTREG_TEST_ENV_LOGGING__LEVEL", "trace");
    set_env("EXTREG_TEST_ENV_DISCOVERY__EMBEDDED", "false");
    let result = ConfigLoader::new()
        .with_env_prefix("EXTREG_TEST_ENV")
        .with_config_path(&config_path)
        .load();
    remove_env("EXTREG_TEST_ENV_LOGGING__LEVEL");
    remove_env("EXTREG_TEST_ENV_DISCOVERY__EMBEDDED");

    let config = result.unwrap();
    assert_eq!(config.logging.level, "trace");
    assert!(!config.discovery.embedded);
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(&temp_dir, "[logging]\nlevel = \"loud\"\n");

    let err = ConfigLoader::new()
        .with_env_prefix("EXTREG_TEST_LEVEL")
        .with_config_path(&config_path)
        .load()
        .unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("Invalid log level: loud"));
}

#[test]
fn test_search_path_must_be_directory() {
    let temp_dir = TempDir::new().unwrap();
    let not_a_dir = temp_dir.path().join("file.txt");
    std::fs::write(&not_a_dir, "").unwrap();
    let config_path = write_config(
        &temp_dir,
        &format!(
            "[discovery]\nsearch_paths = [{:?}]\n",
            not_a_dir.display().to_string()
        ),
    );

    let err = ConfigLoader::new()
        .with_env_prefix("EXTREG_TEST_SEARCH")
        .with_config_path(&config_path)
        .load()
        .unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("is not a directory"));
}

#[test]
fn test_missing_search_path_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("later");
    let config_path = write_config(
        &temp_dir,
        &format!("[discovery]\nsearch_paths = [{:?}]\n", missing.display().to_string()),
    );

    let config = ConfigLoader::new()
        .with_env_prefix("EXTREG_TEST_LATER")
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(config.discovery.search_paths, vec![missing]);
}

#[test]
fn test_malformed_toml_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(&temp_dir, "[logging\nlevel = ");

    let err = ConfigLoader::new()
        .with_env_prefix("EXTREG_TEST_MALFORMED")
        .with_config_path(&config_path)
        .load()
        .unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("Failed to extract configuration"));
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let mut original = AppConfig::default();
    original.logging.level = "error".to_string();
    original.discovery.search_paths = vec![temp_dir.path().to_path_buf()];

    let loader = ConfigLoader::new().with_env_prefix("EXTREG_TEST_SAVE");
    loader.save_to_file(&original, &config_path).unwrap();

    let loaded = loader.with_config_path(&config_path).load().unwrap();
    assert_eq!(loaded, original);
}
