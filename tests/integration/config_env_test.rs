//! Configuration layering: defaults, config file, environment

use std::time::Duration;

use pretty_assertions::assert_eq;
use serial_test::serial;

use cinerate::shared::config::{CONFIG_PATH_ENV, DEFAULT_SERVER_URL, SERVER_URL_ENV};
use cinerate::shared::{AppConfig, ConfigError, IdentifierKind};

struct EnvGuard;

impl Drop for EnvGuard {
    fn drop(&mut self) {
        std::env::remove_var(SERVER_URL_ENV);
        std::env::remove_var(CONFIG_PATH_ENV);
    }
}

fn point_config_at(path: &std::path::Path) -> EnvGuard {
    std::env::remove_var(SERVER_URL_ENV);
    std::env::set_var(CONFIG_PATH_ENV, path);
    EnvGuard
}

#[test]
#[serial]
fn test_defaults_without_file_or_env() {
    let dir = tempfile::tempdir().unwrap();
    let _guard = point_config_at(&dir.path().join("missing.toml"));

    let config = AppConfig::load().unwrap();
    assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    assert_eq!(config.identifier, IdentifierKind::Username);
    assert!(!config.refresh_on_start);
}

#[test]
#[serial]
fn test_file_values_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
server_url = "https://films.example.com/"
identifier = "email"
refresh_on_start = true
request_timeout_secs = 3
"#,
    )
    .unwrap();
    let _guard = point_config_at(&path);

    let config = AppConfig::load().unwrap();
    assert_eq!(config.server_url, "https://films.example.com");
    assert_eq!(config.identifier, IdentifierKind::Email);
    assert!(config.refresh_on_start);
    assert_eq!(config.request_timeout, Duration::from_secs(3));
}

#[test]
#[serial]
fn test_env_url_wins_over_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "server_url = \"https://films.example.com\"\n").unwrap();
    let _guard = point_config_at(&path);
    std::env::set_var(SERVER_URL_ENV, "http://localhost:8080");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.server_url, "http://localhost:8080");
}

#[test]
#[serial]
fn test_invalid_env_url_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let _guard = point_config_at(&dir.path().join("missing.toml"));
    std::env::set_var(SERVER_URL_ENV, "ftp://films.example.com");

    let result = AppConfig::load();
    assert!(matches!(result, Err(ConfigError::InvalidUrl(_))), "got {:?}", result);
}

#[test]
#[serial]
fn test_unknown_file_key_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "sever_url = \"typo\"\n").unwrap();
    let _guard = point_config_at(&path);

    assert!(AppConfig::load().is_err());
}
