//! Error types for Siste.

use thiserror::Error;

/// Library-level error type for Siste operations.
#[derive(Error, Debug)]
pub enum SisteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YouTube API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for Siste operations.
pub type Result<T> = std::result::Result<T, SisteError>;
