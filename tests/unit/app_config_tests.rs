/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use launchgate::app_config::{Config, LogLevel};
use launchgate::errors::AppError;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.submission.url, "http://localhost:8000/upload");
    assert_eq!(config.submission.method, "POST");
    assert_eq!(config.submission.timeout_secs, 30);
    assert!(config.users.is_empty());
    assert!(config.projects.is_empty());
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = common::config_with_registry("https://orchestrator.internal/upload");
    assert!(config.validate().is_ok());

    // Unparseable URL
    config.submission.url = "orchestrator".to_string();
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    // Non-HTTP scheme
    config.submission.url = "ftp://orchestrator/upload".to_string();
    assert!(config.validate().is_err());
    config.submission.url = "http://localhost:8000/upload".to_string();

    // Unsupported method
    config.submission.method = "GET".to_string();
    assert!(config.validate().is_err());
    config.submission.method = "put".to_string();
    assert!(config.validate().is_ok());

    // Zero timeout
    config.submission.timeout_secs = 0;
    assert!(config.validate().is_err());
    config.submission.timeout_secs = 10;

    // Duplicate user id
    let duplicate = config.users[0].clone();
    config.users.push(duplicate);
    let error = config.validate().expect_err("duplicate users must fail");
    assert!(error.to_string().contains("Duplicate user id: u1"));
    config.users.pop();

    // Duplicate project id
    let duplicate = config.projects[0].clone();
    config.projects.push(duplicate);
    assert!(config.validate().is_err());
}

/// Test that partial JSON files fall back to defaults
#[test]
fn test_deserialize_withPartialJson_shouldApplyDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{"submission": {"url": "http://jobs:9000/upload"}, "log_level": "debug"}"#)?;

    assert_eq!(config.submission.url, "http://jobs:9000/upload");
    assert_eq!(config.submission.method, "POST");
    assert_eq!(config.submission.timeout_secs, 30);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
    Ok(())
}

/// Test that a missing config file is created with defaults
#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("launchgate.json");

    let created = Config::load_or_create(&path)?;
    assert!(path.exists());
    assert_eq!(created, Config::default());

    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded, created);
    Ok(())
}

/// Test that saved registries survive a round trip through the file
#[test]
fn test_loadOrCreate_withSavedRegistry_shouldExposeIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("launchgate.json");
    common::config_with_registry("http://localhost:8000/upload").save(&path)?;

    let registry = Config::load_or_create(&path)?.registry();
    assert_eq!(registry.find_user("u1").map(|u| u.name.as_str()), Some("wisrovi"));
    assert_eq!(registry.find_project("p1").map(|p| p.name.as_str()), Some("colorball"));
    Ok(())
}

/// Test that a malformed config file is an error
#[test]
fn test_loadOrCreate_withMalformedFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "launchgate.json", "{ not json")?;

    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}
