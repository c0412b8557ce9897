//! Tests for config path resolution
//!
//! These tests mutate process environment, so they run serially.

use std::fs;
use std::path::PathBuf;

use azdo_annotator::config::Config;
use azdo_annotator::paths;
use serial_test::serial;
use tempfile::TempDir;

/// Set or clear the config override for the duration of a test
fn set_config_env(value: Option<&std::path::Path>) {
    // SAFETY: tests touching the environment are `#[serial]`
    unsafe {
        match value {
            Some(path) => std::env::set_var(paths::CONFIG_ENV, path),
            None => std::env::remove_var(paths::CONFIG_ENV),
        }
    }
}

#[test]
#[serial]
fn test_default_config_file_location() {
    set_config_env(None);
    let path = paths::config_file();
    assert!(path.ends_with(PathBuf::from("azdo-annotator").join("config.toml")));
}

#[test]
#[serial]
fn test_env_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(&path, "[[integrations.azure]]\nhost = \"tfs.corp\"\n").unwrap();

    set_config_env(Some(&path));
    assert_eq!(paths::config_file(), path);

    let config = Config::load_or_default(None).unwrap();
    assert!(config.host_registry().is_recognized("tfs.corp"));

    set_config_env(None);
}

#[test]
#[serial]
fn test_missing_default_config_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    set_config_env(Some(&temp.path().join("absent.toml")));

    let config = Config::load_or_default(None).unwrap();
    assert!(config.integrations.azure.is_empty());

    set_config_env(None);
}
