//! Error types for the nutri_core library.
//!
//! The calculation modules are total and never return these; only the
//! configuration and snapshot loaders do.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for nutri_core I/O operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Snapshot contents rejected
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Weight history row that parsed but holds unusable values
    #[error("Invalid weight row: {0}")]
    InvalidRow(String),
}
