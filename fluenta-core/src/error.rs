//! Error types for fluenta-core

use thiserror::Error;

/// Main error type for the fluenta-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A rating row violated the store contract
    #[error("invalid rating row {index}: {message}")]
    Record { index: usize, message: String },
}

/// Result type alias for fluenta-core
pub type Result<T> = std::result::Result<T, Error>;
