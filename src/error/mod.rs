//! Error handling for coinlens
//!
//! The pure transforms (classification, formatting, sort/filter) never fail.
//! Everything that touches storage, configuration or input files reports
//! through this error type instead.

use crate::exchange::ConversionError;
use std::fmt;

/// Result type alias for fallible coinlens operations
pub type Result<T> = std::result::Result<T, CoinLensError>;

/// Error types for storage, configuration and input handling
#[derive(Debug, Clone, PartialEq)]
pub enum CoinLensError {
    /// Key-value store errors
    Storage(String),
    /// Serialization/deserialization errors
    Serialization(String),
    /// Configuration errors
    Config(String),
    /// File I/O errors
    Io(String),
    /// System clock errors
    Clock(String),
    /// A saved wallet or currency record was not found
    NotFound(String),
    /// A user supplied argument could not be interpreted
    InvalidArgument(String),
    /// Amount conversion errors
    Conversion(ConversionError),
}

impl fmt::Display for CoinLensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinLensError::Storage(msg) => write!(f, "Storage error: {msg}"),
            CoinLensError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            CoinLensError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CoinLensError::Io(msg) => write!(f, "I/O error: {msg}"),
            CoinLensError::Clock(msg) => write!(f, "Clock error: {msg}"),
            CoinLensError::NotFound(what) => write!(f, "Not found: {what}"),
            CoinLensError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            CoinLensError::Conversion(err) => write!(f, "Conversion error: {err}"),
        }
    }
}

impl std::error::Error for CoinLensError {}

impl From<std::io::Error> for CoinLensError {
    fn from(err: std::io::Error) -> Self {
        CoinLensError::Io(err.to_string())
    }
}

impl From<sled::Error> for CoinLensError {
    fn from(err: sled::Error) -> Self {
        CoinLensError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for CoinLensError {
    fn from(err: serde_json::Error) -> Self {
        CoinLensError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for CoinLensError {
    fn from(err: toml::de::Error) -> Self {
        CoinLensError::Config(err.to_string())
    }
}

impl From<ConversionError> for CoinLensError {
    fn from(err: ConversionError) -> Self {
        CoinLensError::Conversion(err)
    }
}
