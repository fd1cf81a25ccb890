//! Error types for Docstore
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! "Not found" is not an error: lookups return `Option`.

use std::io;
use thiserror::Error;

/// Result type alias for Docstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Docstore
#[derive(Debug, Error)]
pub enum Error {
    /// A null, missing or undecodable document or query was handed in
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration value that cannot be honoured
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error (reading configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Build an `InvalidArgument` error from any message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// Build an `InvalidConfig` error from any message
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig(message.into())
    }

    /// True if this error reports bad caller input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}
