//! Error handling for the `myhealth` library.

use std::{io, fmt};
use crate::storage::StorageError;

/// Specialized error type for `myhealth` operations
#[derive(Debug)]
pub enum MyHealthError {
    /// Error opening or reading a file
    IoError(io::Error),
    /// Error from the key-value storage layer
    StorageError(StorageError),
    /// Error validating user-supplied data
    ValidationError(String),
    /// Error resolving runtime configuration
    ConfigError(String),
}

impl From<io::Error> for MyHealthError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error)
    }
}

impl From<StorageError> for MyHealthError {
    fn from(error: StorageError) -> Self {
        Self::StorageError(error)
    }
}

impl fmt::Display for MyHealthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::StorageError(e) => write!(f, "Storage error: {e}"),
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for MyHealthError {}

/// Result type for `myhealth` operations
pub type Result<T> = std::result::Result<T, MyHealthError>;
