//! CLI tests

use std::ffi::OsStr;
use std::process::ExitCode;

use clap::Parser;
use extreg::cli::{Cli, Command, run};
use extreg::infrastructure::config::AppConfig;
use tempfile::TempDir;

use crate::facade_tests::STORE_EXTENSION_POINT;

fn run_to_string(command: Command, config: &AppConfig) -> (ExitCode, String) {
    let mut out = Vec::new();
    let code = run(&command, config, &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

fn with_search_path(dir: &TempDir, embedded: bool) -> AppConfig {
    let mut config = AppConfig::default();
    config.discovery.embedded = embedded;
    config.discovery.search_paths = vec![dir.path().to_path_buf()];
    config
}

fn write_store_manifest(dir: &TempDir, contents: &str) {
    let extensions = dir.path().join("extensions");
    std::fs::create_dir_all(&extensions).unwrap();
    std::fs::write(extensions.join(STORE_EXTENSION_POINT), contents).unwrap();
}

#[test]
fn test_parse_arguments() {
    let cli = Cli::try_parse_from(["extreg", "--config", "extreg.toml", "validate", "app::Store"])
        .unwrap();

    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("extreg.toml")));
    assert_eq!(
        cli.command,
        Command::Validate {
            extension_point: "app::Store".to_string()
        }
    );

    let cli = Cli::try_parse_from(["extreg", "providers", "--json"]).unwrap();
    assert_eq!(cli.command, Command::Providers { json: true });

    assert!(Cli::try_parse_from(["extreg"]).is_err());
    assert!(Cli::try_parse_from(["extreg", "manifests"]).is_err());
}

#[test]
fn test_providers_table() {
    let (code, output) = run_to_string(Command::Providers { json: false }, &AppConfig::default());

    assert_eq!(code, ExitCode::SUCCESS);
    let line = output
        .lines()
        .find(|line| line.contains("::MemoryStore"))
        .unwrap();
    assert!(line.contains(STORE_EXTENSION_POINT));
    assert!(line.contains("\tmemory\t-"));
}

#[test]
fn test_providers_json() {
    let (code, output) = run_to_string(Command::Providers { json: true }, &AppConfig::default());

    assert_eq!(code, ExitCode::SUCCESS);
    let rows: serde_json::Value = serde_json::from_str(&output).unwrap();
    let file = rows
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["key"] == "file")
        .unwrap();
    assert_eq!(file["extension_point"], STORE_EXTENSION_POINT);
    assert!(file["key_class"].is_null());
}

#[test]
fn test_manifests_lists_embedded_then_directories() {
    let dir = TempDir::new().unwrap();
    write_store_manifest(&dir, "");

    let (code, output) = run_to_string(
        Command::Manifests {
            extension_point: STORE_EXTENSION_POINT.to_string(),
        },
        &with_search_path(&dir, true),
    );

    assert_eq!(code, ExitCode::SUCCESS);
    let origins: Vec<_> = output.lines().collect();
    assert_eq!(origins.len(), 2);
    assert_eq!(origins[0], "unit::facade_tests");
    assert!(origins[1].ends_with(STORE_EXTENSION_POINT));
}

#[test]
fn test_validate_prints_key_index() {
    let (code, output) = run_to_string(
        Command::Validate {
            extension_point: STORE_EXTENSION_POINT.to_string(),
        },
        &AppConfig::default(),
    );

    assert_eq!(code, ExitCode::SUCCESS);
    assert!(output.contains("file\tunit::facade_tests::FileStore"));
    assert!(output.contains("memory\tunit::facade_tests::MemoryStore"));
    assert!(output.contains("ok: 2 key(s), 2 listed class(es)"));
}

#[test]
fn test_validate_reports_broken_resource() {
    let dir = TempDir::new().unwrap();
    write_store_manifest(&dir, "# broken\nunit::facade_tests::Missing\n");

    let (code, output) = run_to_string(
        Command::Validate {
            extension_point: STORE_EXTENSION_POINT.to_string(),
        },
        &with_search_path(&dir, false),
    );

    assert_eq!(code, ExitCode::FAILURE);
    assert!(output.starts_with("invalid: "));
    assert!(output.contains(":2: Provider unit::facade_tests::Missing not found"));
}

#[test]
fn test_load_config_from_flag() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("extreg.toml");
    std::fs::write(&path, "[discovery]\nembedded = false\n").unwrap();

    let cli = Cli::try_parse_from([
        OsStr::new("extreg"),
        OsStr::new("--config"),
        path.as_os_str(),
        OsStr::new("providers"),
    ])
    .unwrap();
    let config = cli.load_config().unwrap();

    assert!(!config.discovery.embedded);
}
