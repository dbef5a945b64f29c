//! Error types for locroi-core.

use thiserror::Error;

/// Result type alias for locroi operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for locroi operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}
