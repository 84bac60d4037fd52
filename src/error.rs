//! Error types for portable-report
//!
//! Every stage of the pipeline returns [`Error`]. Nothing recovers locally;
//! the driver is the only place errors are caught and turned into a console
//! line plus a process exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for portable-report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for portable-report
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "source.url")
        key: Option<String>,
    },

    /// The endpoint could not be reached, timed out, or answered with a non-200 status
    #[error("connection error: {message}")]
    Connection {
        /// Human-readable reason
        message: String,
        /// HTTP status, when the server answered at all
        status: Option<u16>,
        /// Underlying transport error, if any
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The response body was not JSON, or not an array of objects
    #[error("parse error: {message}")]
    Parse {
        /// Human-readable reason
        message: String,
        /// Underlying decode error, if any
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Filesystem failure while writing the report
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Anything else
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Build a [`Error::Connection`] for a status other than 200
    pub fn http_status(status: u16, url: &str) -> Self {
        Error::Connection {
            message: format!("HTTP {status} returned by {url}"),
            status: Some(status),
            source: None,
        }
    }

    /// Build a [`Error::Parse`] without an underlying decode error
    pub fn parse(message: impl Into<String>) -> Self {
        Error::Parse {
            message: message.into(),
            source: None,
        }
    }

    /// Build a [`Error::Config`] for a specific key
    pub fn config(key: &str, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }

    /// HTTP status carried by a connection error
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Connection { status, .. } => *status,
            _ => None,
        }
    }

    /// Process exit code used by the binary for this error
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Unexpected(_) => 1,
            Error::Config { .. } => 2,
            Error::Connection { .. } => 3,
            Error::Parse { .. } => 4,
            Error::Io { .. } => 5,
        }
    }

    /// Machine-readable kind, used in structured log fields
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config { .. } => "config_error",
            Error::Connection { .. } => "connection_error",
            Error::Parse { .. } => "parse_error",
            Error::Io { .. } => "io_error",
            Error::Unexpected(_) => "unexpected_error",
        }
    }
}
