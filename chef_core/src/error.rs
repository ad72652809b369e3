//! Error types for the chef_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for chef_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Remote catalog fetch error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// People count outside the supported range
    #[error("People count must be between {min} and {max}, got {0}", min = crate::MIN_PEOPLE, max = crate::MAX_PEOPLE)]
    InvalidPeopleCount(u32),

    /// Category not present in the loaded catalog
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
