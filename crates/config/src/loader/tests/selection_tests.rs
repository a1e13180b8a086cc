//! Tests for choosing between the override and default env files.

use std::fs;
use tempfile::TempDir;

use super::fixture_dir;
use crate::env::MemoryEnv;
use crate::error::ConfigError;
use crate::loader::DiaperConfig;

#[test]
fn test_override_file_is_preferred() {
    let dir = fixture_dir();
    let loader = DiaperConfig::new().with_default_env_file("app.env");

    let config = loader
        .read_from_file_with("test", dir.path(), &MemoryEnv::new())
        .unwrap();

    assert_eq!(config.get_int("port"), Some(9090));
    assert!(config.contains_key("authz_client_id"));
    assert!(!config.contains_key("authz_domain"));
}

#[test]
fn test_missing_override_falls_back_to_default() {
    let dir = fixture_dir();
    let loader = DiaperConfig::new().with_default_env_file("app.env");

    let config = loader
        .read_from_file_with("staging", dir.path(), &MemoryEnv::new())
        .unwrap();

    assert_eq!(config.get_int("port"), Some(8080));
    assert_eq!(config.get_string("authz_domain"), Some("localhost"));
}

#[test]
fn test_environment_name_case_is_ignored() {
    let dir = fixture_dir();
    let loader = DiaperConfig::new().with_default_env_file("app.env");

    let config = loader
        .read_from_file_with("TeSt", dir.path(), &MemoryEnv::new())
        .unwrap();

    assert_eq!(config.get_int("port"), Some(9090));
}

#[test]
fn test_default_env_file_defaults_to_dot_env() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "PORT=7070\n").unwrap();
    let loader = DiaperConfig::new();

    assert_eq!(loader.default_env_file(), ".env");
    let config = loader
        .read_from_file_with("prod", temp_dir.path(), &MemoryEnv::new())
        .unwrap();

    assert_eq!(config.get_int("port"), Some(7070));
}

#[test]
fn test_empty_default_env_file_is_treated_as_unset() {
    let loader = DiaperConfig::new().with_default_env_file("");

    assert_eq!(loader.default_env_file(), ".env");
}

#[test]
fn test_missing_default_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let loader = DiaperConfig::new().with_default_env_file("app.env");

    let result = loader.read_from_file_with("dev", temp_dir.path(), &MemoryEnv::new());

    match result {
        Err(ConfigError::EnvFileRead { path, kind }) => {
            assert_eq!(kind, std::io::ErrorKind::NotFound);
            assert!(path.ends_with("app.env"));
        }
        other => panic!("expected EnvFileRead, got {:?}", other),
    }
}

#[test]
fn test_malformed_selected_file_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("dev.env"), "GOOD=1\nBROKEN LINE\n").unwrap();
    let loader = DiaperConfig::new();

    let result = loader.read_from_file_with("dev", temp_dir.path(), &MemoryEnv::new());

    assert!(matches!(result, Err(ConfigError::EnvFileParse { .. })));
}
