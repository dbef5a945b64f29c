//! I/O error types.

use thiserror::Error;

/// Result type for I/O operations.
pub type Result<T> = std::result::Result<T, Error>;

/// I/O error types.
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error, including content that is not valid UTF-8.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input line.
    #[error("invalid format at line {line}: {message}")]
    Format {
        /// 1-based line number in the input file.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// Core library error.
    #[error("core error: {0}")]
    CoreError(#[from] locroi_core::Error),
}

impl Error {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }
}
