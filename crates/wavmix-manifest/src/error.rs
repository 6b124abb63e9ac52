//! Error types for manifest loading and parsing.

use thiserror::Error;

/// Result type for manifest operations.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Errors that can occur while reading a clip manifest.
///
/// All of these are fatal: a manifest either parses completely or not at all.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("cannot open manifest '{path}': {source}")]
    Io {
        /// Manifest path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Token count is not a multiple of three.
    #[error(
        "manifest must contain groups of 3: <wavfile> <starttime> <volume> (found {token_count} tokens)"
    )]
    MalformedStructure {
        /// Total number of whitespace separated tokens.
        token_count: usize,
    },

    /// A numeric field could not be parsed.
    #[error("invalid number '{token}' on line {line}")]
    InvalidNumber {
        /// The offending token.
        token: String,
        /// 1-based line number.
        line: usize,
    },

    /// Negative start time in strict mode.
    #[error("start time cannot be negative: {value} (line {line})")]
    NegativeStartTime {
        /// The parsed value.
        value: f64,
        /// 1-based line number.
        line: usize,
    },

    /// Negative gain in strict mode.
    #[error("volume cannot be negative: {value} (line {line})")]
    NegativeGain {
        /// The parsed value.
        value: f64,
        /// 1-based line number.
        line: usize,
    },
}

impl ManifestError {
    /// Returns the stable error code (e.g., "M001").
    pub fn code(&self) -> &'static str {
        match self {
            ManifestError::Io { .. } => "M001",
            ManifestError::MalformedStructure { .. } => "M002",
            ManifestError::InvalidNumber { .. } => "M003",
            ManifestError::NegativeStartTime { .. } => "M004",
            ManifestError::NegativeGain { .. } => "M005",
        }
    }
}
