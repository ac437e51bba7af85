//! Unified error types for chatlens.
//!
//! Only document-level problems surface as [`ChatlensError`]. A single
//! malformed line is never an error: the line parser reports it as a
//! [`Rejection`](crate::parser::Rejection) and the normalizer drops it.
//! Likewise a failing sentiment classifier never produces an error, see
//! [`sentiment`](crate::sentiment).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::ChatTable;
///
/// fn load() -> Result<ChatTable> {
///     Ok(ChatTable::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when the transcript doesn't exist or is not
    /// readable, or when an output file cannot be written.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript is not valid UTF-8.
    ///
    /// This is the document-level failure of normalization: no partial
    /// table is produced.
    #[error("UTF-8 decoding error in {}: {source}", path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "input".to_string()))]
    Utf8 {
        /// The file being decoded, if known
        path: Option<PathBuf>,
        /// The underlying UTF-8 error
        #[source]
        source: std::str::Utf8Error,
    },

    /// The requested format doesn't exist or isn't compiled in.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A parser or sentiment configuration value is unusable.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration field
        field: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a UTF-8 decoding error, optionally tied to a file.
    pub fn utf8(source: std::str::Utf8Error, path: Option<PathBuf>) -> Self {
        ChatlensError::Utf8 { path, source }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the input could not be decoded as text.
    pub fn is_decode(&self) -> bool {
        matches!(self, ChatlensError::Utf8 { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    /// Returns `true` if this is an invalid configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ChatlensError::InvalidConfig { .. })
    }
}
