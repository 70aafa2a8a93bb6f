//! Error types and Result aliases for center

use std::io;
use std::path::PathBuf;

/// Result type alias for center operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for center
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Configuration errors ===
    /// Numeric argument could not be parsed
    #[error("Invalid integer '{value}'")]
    InvalidInteger { value: String },

    /// Width was zero or negative
    #[error("Width must be >0 (got {value})")]
    WidthNotPositive { value: i64 },

    /// Tab width was negative
    #[error("Tab width must be >=0 (got {value})")]
    NegativeTabWidth { value: i64 },

    /// No width was given and stdout is not a terminal
    #[error("Unable to determine output width")]
    WidthUnavailable,

    /// Failed to read a defaults file
    #[error("Failed to load config from '{}': {reason}", .path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to parse a defaults file
    #[error("Failed to parse config '{}': {reason}", .path.display())]
    ConfigParseFailed { path: PathBuf, reason: String },

    // === Input errors ===
    /// Failed to open an input file
    #[error("{}: {source}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed partway through reading an input source
    #[error("{source_name}: read failed: {source}")]
    ReadFailed {
        source_name: String,
        #[source]
        source: io::Error,
    },

    /// Could not grow the buffer holding a block
    #[error("{source_name}: out of memory after buffering {lines} lines")]
    AllocationFailed { source_name: String, lines: usize },

    // === Output errors ===
    /// Failed to write centered output
    #[error("write failed: {0}")]
    WriteFailed(#[source] io::Error),
}

impl Error {
    /// Whether this error aborts the whole run rather than a single source
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Error::OpenFailed { .. } | Error::ReadFailed { .. } | Error::AllocationFailed { .. }
        )
    }
}
