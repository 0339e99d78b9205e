/*!
 * Tests for app configuration
 */

use anyhow::Result;
use dualsub::app_config::Config;

/// Test default configuration values
#[test]
fn test_default_config_shouldHaveExpectedValues() {
    let config = Config::default();
    assert_eq!(config.primary_language, "ru");
    assert_eq!(config.secondary_language, "en");
    assert_eq!(config.sync.tolerance_ms, 300);
    assert!(config.display.enabled);
    assert!(!config.display.swap_order);
    assert!(config.validate().is_ok());
}

/// Missing fields fall back to per-field serde defaults
#[test]
fn test_config_deserialization_withEmptyObject_shouldUseDefaults() -> Result<()> {
    let config: Config = serde_json::from_str("{}")?;
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
fn test_config_deserialization_withPartialObject_shouldKeepOtherDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(
        r#"{"secondary_language": "fr", "sync": {"tolerance_ms": 500}}"#,
    )?;
    assert_eq!(config.secondary_language, "fr");
    assert_eq!(config.sync.tolerance_ms, 500);
    assert_eq!(config.primary_language, "ru");
    assert!(config.display.enabled);
    Ok(())
}

/// Validation rejects unknown language codes
#[test]
fn test_validate_withInvalidLanguage_shouldFail() {
    let mut config = Config::default();
    config.primary_language = "xyz".to_string();
    assert!(config.validate().is_err());
}

/// Validation rejects the same language in both slots, across code forms
#[test]
fn test_validate_withDuplicateLanguages_shouldFail() {
    let mut config = Config::default();
    config.primary_language = "en".to_string();
    config.secondary_language = "eng".to_string();
    assert!(config.validate().is_err());
}

/// Save and reload round-trips the configuration
#[test]
fn test_config_file_roundTrip_shouldPreserveValues() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.sync.tolerance_ms = 450;
    config.display.swap_order = true;
    config.save_to_file(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded, config);
    Ok(())
}

/// Loading a config file with an invalid language fails at load time
#[test]
fn test_from_file_withInvalidLanguage_shouldFail() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("conf.json");
    std::fs::write(&path, r#"{"primary_language": "nope"}"#)?;

    assert!(Config::from_file(&path).is_err());
    Ok(())
}
