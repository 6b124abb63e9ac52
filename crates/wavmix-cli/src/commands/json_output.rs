//! JSON output types for machine-readable CLI output.
//!
//! Printed on stdout when `--json` is given in place of colored output.

use serde::{Deserialize, Serialize};
use wavmix_engine::{ClipStatus, MixReport};

/// Error codes for CLI operations.
///
/// Manifest (`M0xx`) and engine (`ENG_0xx`) codes are passed through as-is.
pub mod error_codes {
    /// Config file could not be read or parsed
    pub const CONFIG: &str = "CLI_001";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_002";
}

/// Warning codes for CLI operations.
pub mod warning_codes {
    /// A clip was skipped
    pub const CLIP_SKIPPED: &str = "CLI_W001";
    /// A clip ran out of samples before its nominal end
    pub const CLIP_TRUNCATED: &str = "CLI_W002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "M002", "ENG_005")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "CLI_W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this warning.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Collects one warning per skipped or truncated clip.
pub fn clip_warnings(report: &MixReport) -> Vec<JsonWarning> {
    report
        .clips
        .iter()
        .filter_map(|clip| {
            let code = match clip.status {
                ClipStatus::Mixed => return None,
                ClipStatus::Skipped => warning_codes::CLIP_SKIPPED,
                ClipStatus::Truncated => warning_codes::CLIP_TRUNCATED,
            };
            let reason = clip.reason.as_deref().unwrap_or("no reason given");
            Some(
                JsonWarning::new(code, format!("clip {}: {}", clip.index, reason))
                    .with_file(clip.source.clone()),
            )
        })
        .collect()
}

/// JSON output for a mixing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixOutput {
    /// Whether the mix succeeded
    pub success: bool,
    /// Fatal errors
    pub errors: Vec<JsonError>,
    /// Skipped or truncated clips
    pub warnings: Vec<JsonWarning>,
    /// Mix result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MixResult>,
}

impl MixOutput {
    /// Creates a successful mix output.
    pub fn success(result: MixResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings: clip_warnings(&result.report),
            result: Some(result),
        }
    }

    /// Creates a failed mix output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            warnings: Vec::new(),
            result: None,
        }
    }
}

/// Result details for a successful mix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixResult {
    /// Manifest that was mixed
    pub manifest: String,
    /// Output WAV path
    pub output: String,
    /// Bits per sample of the output
    pub bit_depth: u16,
    /// Size of the written file in bytes
    pub file_size: usize,
    /// BLAKE3 hash of the PCM data chunk
    pub pcm_hash: String,
    /// Mix report
    pub report: MixReport,
}
