use std::io;

use thiserror::Error;

/// Library-wide error type for ordtrack operations.
///
/// Lookup outcomes (unknown identifiers, unrecognized statuses) are not errors;
/// they are carried by [`crate::domain::ResolutionResult`].
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Order file does not exist at the given path.
    #[error("Order file not found: {0}")]
    OrderFileMissing(String),

    /// Order file parsed but its content is unusable.
    #[error("Invalid order file: {0}")]
    InvalidOrderFile(String),

    /// Interactive input failed.
    #[error("Failed to read order ID: {0}")]
    Prompt(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON rendering error.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers matching on error categories.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::OrderFileMissing(_) => io::ErrorKind::NotFound,
            AppError::InvalidOrderFile(_) | AppError::TomlParseError(_) => {
                io::ErrorKind::InvalidData
            }
            AppError::Prompt(_) | AppError::Serialization(_) => io::ErrorKind::Other,
        }
    }
}
