//! Error types for deck loading and Scryfall access

use thiserror::Error;

/// Errors from talking to Scryfall or handling the images it serves
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Scryfall returned an error object
    #[error("{code}: {details}")]
    ApiResponse { code: String, details: String },
    /// HTTP error status code without a usable error body
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Image could not be decoded or encoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that abort loading a decklist or starting the simulator
#[derive(Debug, Error)]
pub enum DeckError {
    /// A decklist line is not of the form `<count> <name>`
    #[error("Parse error at line {line} ({content:?}): {reason}")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },
    /// Decklist or config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for deck operations
pub type DeckResult<T> = Result<T, DeckError>;
