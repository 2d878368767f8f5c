/// Structured error types for lineupctl-core library.
///
/// Uses `thiserror` for better API surface and error composition.
/// Binary crates (lineupctl-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lineupctl-core operations
#[derive(Error, Debug)]
pub enum LineupError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Metadata file parsing failed
    #[error("Malformed metadata in {path:?}: {source}")]
    Metadata {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Navigation index out of range (caller error, never clamped)
    #[error("Index {index} out of range for catalog of {total} entries")]
    InvalidIndex { index: usize, total: usize },

    /// Platform clipboard could not be accessed
    #[error("Clipboard unavailable: {reason}")]
    ClipboardUnavailable { reason: String },

    /// Reference URL is empty or unparsable
    #[error("Invalid reference URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for lineupctl-core operations
pub type Result<T> = std::result::Result<T, LineupError>;

impl LineupError {
    /// Create a metadata parse error
    pub fn metadata(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Metadata {
            path: path.into(),
            source,
        }
    }

    /// Create an out-of-range index error
    pub fn invalid_index(index: usize, total: usize) -> Self {
        Self::InvalidIndex { index, total }
    }

    /// Create a clipboard unavailable error
    pub fn clipboard_unavailable(reason: impl Into<String>) -> Self {
        Self::ClipboardUnavailable {
            reason: reason.into(),
        }
    }

    /// Create an invalid URL error
    pub fn invalid_url(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LineupError::invalid_index(9, 5);
        assert_eq!(
            err.to_string(),
            "Index 9 out of range for catalog of 5 entries"
        );

        let err = LineupError::invalid_url("not a url", "relative URL without a base");
        assert!(err.to_string().contains("Invalid reference URL"));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let lineup_err: LineupError = io_err.into();

        assert!(matches!(lineup_err, LineupError::Io { .. }));
    }
}
