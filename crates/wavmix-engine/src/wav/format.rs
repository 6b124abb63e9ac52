//! WAV file format parameters.

use crate::error::EngineResult;
use crate::settings::validate_bit_depth;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (8, 16, 24 or 32, integer PCM).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a stereo format, rejecting unsupported bit depths.
    pub fn stereo(sample_rate: u32, bits_per_sample: u16) -> EngineResult<Self> {
        validate_bit_depth(bits_per_sample)?;
        Ok(Self {
            channels: 2,
            sample_rate,
            bits_per_sample,
        })
    }

    /// Calculates bytes per sample (per channel).
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
