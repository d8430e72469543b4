//! Config file discovery.

use inception_games::config::{Settings, DEFAULT_CONFIG_FILE};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_discover_without_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let settings = Settings::discover(None, dir.path()).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_discover_reads_default_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "tick_rate_ms = 250\n").unwrap();

    let settings = Settings::discover(None, dir.path()).unwrap();
    assert_eq!(*settings.tick_rate_ms(), 250);
}

#[test]
fn test_explicit_path_wins() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "tick_rate_ms = 250\n").unwrap();
    let explicit = dir.path().join("other.toml");
    fs::write(&explicit, "hover_highlight = false\n").unwrap();

    let settings = Settings::discover(Some(explicit.as_path()), dir.path()).unwrap();
    assert!(!*settings.hover_highlight());
    assert_eq!(*settings.tick_rate_ms(), 100);
}

#[test]
fn test_missing_explicit_path_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.toml");

    let err = Settings::discover(Some(missing.as_path()), dir.path()).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[theme]\ngrid = 42\n").unwrap();

    assert!(Settings::discover(None, dir.path()).is_err());
}

#[test]
fn test_example_config_matches_defaults() {
    let settings = Settings::from_toml(include_str!("../../../inception.example.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}
