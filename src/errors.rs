/*!
 * Error types for the dualsub application.
 *
 * This module contains custom error types for the configuration and file
 * boundary, using the thiserror crate for ergonomic error definitions.
 *
 * The parsing and synchronization engine itself never surfaces errors:
 * malformed timecodes, blocks, and cues are dropped at the smallest
 * possible granularity and parsing continues, so engine APIs return
 * `Option` rather than `Result`.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A language code that is neither ISO 639-1 nor ISO 639-3
    #[error("Invalid language code: {0}")]
    InvalidLanguage(String),

    /// Both slots configured with the same language
    #[error("Primary and secondary languages are the same: {0} / {1}")]
    DuplicateLanguages(String, String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration handling
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
