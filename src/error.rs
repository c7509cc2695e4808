//! Error types for circuit-trace

use std::io;
use thiserror::Error;

/// Main error type for circuit-trace operations
#[derive(Debug, Error)]
pub enum TraceError {
    /// IO error occurred while reading or writing an entity stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A numeric token could not be parsed
    #[error("Invalid number: {token:?}")]
    InvalidNumber { token: String },

    /// A `#AARRGGBB` color token could not be parsed
    #[error("Invalid color: {token:?}")]
    InvalidColor { token: String },

    /// An `L<layer>` token named an unknown layer
    #[error("Invalid layer: {token:?}")]
    InvalidLayer { token: String },

    /// A `(x;y)` point token could not be parsed
    #[error("Invalid point: {token:?}")]
    InvalidPoint { token: String },

    /// A field is present but does not have the expected shape
    #[error("Malformed {field} field: {token:?}")]
    MalformedField { field: &'static str, token: String },

    /// A fatal error on a specific line of a bulk import
    #[error("Line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<TraceError>,
    },

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

impl TraceError {
    /// Attach a 1-based line number to this error
    pub fn at_line(self, line: usize) -> Self {
        TraceError::Line {
            line,
            source: Box::new(self),
        }
    }
}

/// Result type alias for circuit-trace operations
pub type Result<T> = std::result::Result<T, TraceError>;

impl From<String> for TraceError {
    fn from(s: String) -> Self {
        TraceError::Custom(s)
    }
}

impl From<&str> for TraceError {
    fn from(s: &str) -> Self {
        TraceError::Custom(s.to_string())
    }
}
