//! Error types for the mixing engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while mixing.
///
/// Decode and channel errors are recoverable at the clip boundary: the
/// pipeline logs them and skips the clip. Everything else is fatal.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Invalid output sample rate.
    #[error("invalid sample rate: {rate} (must be 1~384000 Hz)")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Unsupported output bit depth.
    #[error("unsupported bit depth: {bits} (supported: 8, 16, 24, 32)")]
    InvalidBitDepth {
        /// The requested bit depth.
        bits: u16,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// The clip list was empty.
    #[error("no valid clips found")]
    NoClips,

    /// Every clip failed to decode.
    #[error("none of the {count} clips could be decoded")]
    NoValidClips {
        /// Number of clips in the manifest.
        count: usize,
    },

    /// The mix contained no audible samples.
    #[error("no audio data to mix")]
    EmptyMix,

    /// A source file could not be decoded.
    #[error("failed to load '{path}': {message}")]
    Decode {
        /// Source path.
        path: String,
        /// Decoder message.
        message: String,
    },

    /// Source audio has a channel count other than 1 or 2.
    #[error("unsupported channel count: {channels} (only mono and stereo are supported)")]
    UnsupportedChannels {
        /// The channel count found.
        channels: usize,
    },

    /// Stereo channels have different sample counts.
    #[error("channel length mismatch: left has {left} samples, right has {right}")]
    ChannelLengthMismatch {
        /// Left channel length.
        left: usize,
        /// Right channel length.
        right: usize,
    },

    /// The output file could not be written.
    #[error("failed to save '{path}': {message}")]
    Encode {
        /// Output path.
        path: String,
        /// Error message.
        message: String,
    },

    /// The mix would be longer than a WAV file can hold.
    #[error("mix would need {samples:.0} samples per channel (limit {limit})")]
    BufferTooLarge {
        /// Requested length in samples per channel.
        samples: f64,
        /// Largest supported length.
        limit: usize,
    },
}

impl EngineError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a decode error.
    pub fn decode(path: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Creates an encode error.
    pub fn encode(path: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Encode {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Returns the stable error code (e.g., "ENG_001").
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidSampleRate { .. } => "ENG_001",
            EngineError::InvalidBitDepth { .. } => "ENG_002",
            EngineError::InvalidParameter { .. } => "ENG_003",
            EngineError::NoClips => "ENG_004",
            EngineError::NoValidClips { .. } => "ENG_005",
            EngineError::EmptyMix => "ENG_006",
            EngineError::Decode { .. } => "ENG_007",
            EngineError::UnsupportedChannels { .. } => "ENG_008",
            EngineError::ChannelLengthMismatch { .. } => "ENG_009",
            EngineError::Encode { .. } => "ENG_010",
            EngineError::BufferTooLarge { .. } => "ENG_011",
        }
    }

    /// Returns true for errors that only affect a single clip.
    pub fn is_clip_local(&self) -> bool {
        matches!(
            self,
            EngineError::Decode { .. }
                | EngineError::UnsupportedChannels { .. }
                | EngineError::ChannelLengthMismatch { .. }
        )
    }
}
