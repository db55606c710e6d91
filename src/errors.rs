/*!
 * Error types for the signspeak application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 *
 * Validation outcomes (empty input, credential mismatch, duplicate registration)
 * are NOT errors - they are surfaced as negative results by the stores. The types
 * here cover infrastructure failures only.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to the local key-value store
#[derive(Error, Debug)]
pub enum StorageError {
    /// Error reading a value from the store
    #[error("Failed to read key '{key}': {message}")]
    ReadFailed {
        /// Key that was being read
        key: String,
        /// Underlying failure description
        message: String,
    },

    /// Error writing a value to the store
    #[error("Failed to write key '{key}': {message}")]
    WriteFailed {
        /// Key that was being written
        key: String,
        /// Underlying failure description
        message: String,
    },

    /// Error deleting a value from the store
    #[error("Failed to delete key '{key}': {message}")]
    DeleteFailed {
        /// Key that was being deleted
        key: String,
        /// Underlying failure description
        message: String,
    },

    /// Error opening or initializing the backing store
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the configuration layer
    #[error("Config error: {0}")]
    Config(String),

    /// Error from the key-value store
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

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
        Self::Config(error.to_string())
    }
}
