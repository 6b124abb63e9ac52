//! Mix settings.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
/// Highest accepted output sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 384_000;
/// Default output bit depth.
pub const DEFAULT_BIT_DEPTH: u16 = 16;
/// Bit depths the WAV encoder can write.
pub const SUPPORTED_BIT_DEPTHS: [u16; 4] = [8, 16, 24, 32];

/// Settings for one mixing run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixSettings {
    /// Output sample rate in Hz. Clips at other rates are resampled.
    pub sample_rate: u32,
    /// Output bit depth.
    pub bit_depth: u16,
    /// Magnitude at or below which trailing samples count as silence.
    pub trim_tolerance: f64,
}

impl Default for MixSettings {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            bit_depth: DEFAULT_BIT_DEPTH,
            trim_tolerance: 0.0,
        }
    }
}

impl MixSettings {
    /// Creates default settings at the given sample rate.
    pub fn with_sample_rate(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..Self::default()
        }
    }

    /// Checks that every field is in range.
    pub fn validate(&self) -> EngineResult<()> {
        validate_sample_rate(self.sample_rate)?;
        validate_bit_depth(self.bit_depth)?;
        if !self.trim_tolerance.is_finite() || self.trim_tolerance < 0.0 {
            return Err(EngineError::invalid_param(
                "trim_tolerance",
                format!("must be finite and >= 0, got {}", self.trim_tolerance),
            ));
        }
        Ok(())
    }
}

/// Checks that `rate` is within 1..=384000 Hz.
pub fn validate_sample_rate(rate: u32) -> EngineResult<()> {
    if rate == 0 || rate > MAX_SAMPLE_RATE {
        return Err(EngineError::InvalidSampleRate { rate });
    }
    Ok(())
}

/// Checks that `bits` is a depth the encoder supports.
pub fn validate_bit_depth(bits: u16) -> EngineResult<()> {
    if !SUPPORTED_BIT_DEPTHS.contains(&bits) {
        return Err(EngineError::InvalidBitDepth { bits });
    }
    Ok(())
}
