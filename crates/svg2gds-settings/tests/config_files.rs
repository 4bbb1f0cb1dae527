use std::fs;
use svg2gds_core::ApproximationMethod;
use svg2gds_settings::{Config, ConfigOverrides, SettingsError};
use tempfile::TempDir;

fn adaptive_config() -> Config {
    let mut config = Config::default();
    config.approximation.method = ApproximationMethod::Adaptive;
    config.approximation.max_error = 0.002;
    config.transform.desired_width = Some(250.0);
    config.transform.center_on_origin = true;
    config
}

#[test]
fn test_save_and_load_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let config = adaptive_config();
    config.save_to_file(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[approximation]"));
    assert!(content.contains("method = \"adaptive\""));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_save_and_load_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let config = adaptive_config();
    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.toml");
    fs::write(&path, "[approximation]\nsteps = 64\n").unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.approximation.method, ApproximationMethod::Fixed);
    assert_eq!(loaded.approximation.steps, 64);
    assert_eq!(loaded.approximation.max_error, 0.01);
    assert!(loaded.transform.flip_y);
    assert_eq!(loaded.transform.desired_width, None);
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[approximation]\nmethod = \"adaptive\"\nmax_error = -1.0\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Config(_)));
}

#[test]
fn test_malformed_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"approximation\": ").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::JsonError(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from_file(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, SettingsError::IoError(_)));
}

#[test]
fn test_overrides_win_over_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    adaptive_config().save_to_file(&path).unwrap();

    let mut config = Config::load_from_file(&path).unwrap();
    let mut overrides = ConfigOverrides::default();
    overrides.set("method", "fixed").unwrap();
    overrides.set("steps", "32").unwrap();
    overrides.no_flip_y = true;
    config.merge(&overrides).unwrap();

    assert_eq!(config.approximation.method, ApproximationMethod::Fixed);
    assert_eq!(config.approximation.steps, 32);
    assert_eq!(config.approximation.max_error, 0.002);
    assert_eq!(config.transform.desired_width, Some(250.0));
    assert!(!config.transform.flip_y);
    assert!(config.transform.center_on_origin);
}
