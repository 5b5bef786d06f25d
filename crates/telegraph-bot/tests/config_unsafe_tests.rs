#![allow(unsafe_code)]

//! Config loading driven by environment variables
//! Kept out of the library so it can stay under forbid(unsafe_code)

use serial_test::serial;
use std::io::Write;
use telegraph_bot::config::{Config, get_config, types::CONFIG_PATH};
use telegraph_bot::error::BotError;
use tempfile::NamedTempFile;

fn remove_env_var(key: &str) {
    unsafe {
        std::env::remove_var(key);
    }
}

fn set_env_var(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}

#[test]
#[serial]
fn test_config_new_fallback_to_default() {
    remove_env_var(CONFIG_PATH);

    let config = Config::new();
    assert_eq!(config, Config::default());
    assert_eq!(config.network.request_timeout_secs, 30);
    assert_eq!(config.network.pool_idle_timeout_secs, 90);
}

#[test]
#[serial]
fn test_get_config_missing_env_var() {
    remove_env_var(CONFIG_PATH);

    match get_config().unwrap_err() {
        BotError::Config(_) => {}
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_get_config_missing_file() {
    set_env_var(CONFIG_PATH, "/path/that/does/not/exist/config.toml");

    let result = get_config();
    remove_env_var(CONFIG_PATH);
    assert!(matches!(result, Err(BotError::Io(_))));
}

#[test]
#[serial]
fn test_get_config_invalid_toml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[network\nrequest_timeout_secs = ").unwrap();
    set_env_var(CONFIG_PATH, file.path().to_str().unwrap());

    let result = get_config();
    remove_env_var(CONFIG_PATH);
    assert!(matches!(result, Err(BotError::Config(_))));
}

#[test]
#[serial]
fn test_get_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[api]
base_url = "http://localhost:8081"

[network]
request_timeout_secs = 5
max_idle_connections = 2
"#
    )
    .unwrap();
    set_env_var(CONFIG_PATH, file.path().to_str().unwrap());

    let config = get_config();
    remove_env_var(CONFIG_PATH);
    let config = config.unwrap();
    assert_eq!(config.api.base_url, "http://localhost:8081");
    assert_eq!(config.network.request_timeout_secs, 5);
    assert_eq!(config.network.max_idle_connections, 2);
    assert_eq!(config.network.connect_timeout_secs, 10);
}
