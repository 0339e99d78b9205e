use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::errors::ConfigError;
use crate::language_utils;
use crate::synchronizer::DEFAULT_TOLERANCE_MS;

/// Application configuration module
/// This module handles the persisted settings consumed by the engine:
/// language slot assignment, merge tolerance, and display toggles. The
/// engine itself never reads or writes this file; values are passed in as
/// plain parameters.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Language code (ISO) expected in the primary slot
    #[serde(default = "default_primary_language")]
    pub primary_language: String,

    /// Language code (ISO) expected in the secondary slot
    #[serde(default = "default_secondary_language")]
    pub secondary_language: String,

    /// Track synchronization config
    #[serde(default)]
    pub sync: SyncConfig,

    /// Display config
    #[serde(default)]
    pub display: DisplayConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Track synchronization configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SyncConfig {
    /// Tolerance window for the bilingual merge, in milliseconds
    #[serde(default = "default_tolerance_ms")]
    pub tolerance_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            tolerance_ms: default_tolerance_ms(),
        }
    }
}

/// Display configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Whether display lines are produced at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Show the secondary language on the first line
    #[serde(default)]
    pub swap_order: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            swap_order: false,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_primary_language() -> String {
    "ru".to_string()
}

fn default_secondary_language() -> String {
    "en".to_string()
}

fn default_tolerance_ms() -> u64 {
    DEFAULT_TOLERANCE_MS
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create config file: {}", path.display()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if language_utils::resolve_language(&self.primary_language).is_err() {
            return Err(ConfigError::InvalidLanguage(self.primary_language.clone()));
        }
        if language_utils::resolve_language(&self.secondary_language).is_err() {
            return Err(ConfigError::InvalidLanguage(self.secondary_language.clone()));
        }
        if language_utils::language_codes_match(&self.primary_language, &self.secondary_language) {
            return Err(ConfigError::DuplicateLanguages(
                self.primary_language.clone(),
                self.secondary_language.clone(),
            ));
        }
        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            primary_language: default_primary_language(),
            secondary_language: default_secondary_language(),
            sync: SyncConfig::default(),
            display: DisplayConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
