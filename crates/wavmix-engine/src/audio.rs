//! Decoded clip audio.

use crate::error::{EngineError, EngineResult};
use crate::resample::resample;

/// Sample data for a decoded clip, mono or stereo.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipSamples {
    /// Mono samples (single channel).
    Mono(Vec<f64>),
    /// Stereo samples (separate left/right channels).
    Stereo { left: Vec<f64>, right: Vec<f64> },
}

impl ClipSamples {
    /// Get the number of samples available on every channel.
    pub fn len(&self) -> usize {
        match self {
            ClipSamples::Mono(samples) => samples.len(),
            ClipSamples::Stereo { left, right } => left.len().min(right.len()),
        }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of channels (1 or 2).
    pub fn channels(&self) -> usize {
        match self {
            ClipSamples::Mono(_) => 1,
            ClipSamples::Stereo { .. } => 2,
        }
    }

    /// Returns the (left, right) output pair for sample `index`.
    ///
    /// Mono reads channel 0 for both outputs; stereo reads channel `i` for
    /// output `i`. Returns `None` past the end of the shortest channel.
    #[inline]
    pub fn frame(&self, index: usize) -> Option<(f64, f64)> {
        match self {
            ClipSamples::Mono(samples) => samples.get(index).map(|&s| (s, s)),
            ClipSamples::Stereo { left, right } => {
                Some((*left.get(index)?, *right.get(index)?))
            }
        }
    }
}

/// A decoded clip at a known sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    /// Sample rate in Hz.
    sample_rate: u32,
    /// Per-channel samples.
    samples: ClipSamples,
}

impl DecodedAudio {
    /// Creates mono audio.
    pub fn mono(sample_rate: u32, samples: Vec<f64>) -> Self {
        Self {
            sample_rate,
            samples: ClipSamples::Mono(samples),
        }
    }

    /// Creates stereo audio.
    pub fn stereo(sample_rate: u32, left: Vec<f64>, right: Vec<f64>) -> Self {
        Self {
            sample_rate,
            samples: ClipSamples::Stereo { left, right },
        }
    }

    /// Builds audio from planar channels, as handed over by a decoder.
    ///
    /// # Errors
    /// Fails for zero or more than two channels, and for stereo channels of
    /// different lengths.
    pub fn from_channels(sample_rate: u32, mut channels: Vec<Vec<f64>>) -> EngineResult<Self> {
        match channels.len() {
            1 => Ok(Self::mono(sample_rate, channels.remove(0))),
            2 => {
                let right = channels.remove(1);
                let left = channels.remove(0);
                if left.len() != right.len() {
                    return Err(EngineError::ChannelLengthMismatch {
                        left: left.len(),
                        right: right.len(),
                    });
                }
                Ok(Self::stereo(sample_rate, left, right))
            }
            n => Err(EngineError::UnsupportedChannels { channels: n }),
        }
    }

    /// Returns the sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Returns the sample data.
    pub fn samples(&self) -> &ClipSamples {
        &self.samples
    }

    /// Number of channels (1 or 2).
    pub fn channels(&self) -> usize {
        self.samples.channels()
    }

    /// Number of samples per channel.
    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    /// Length in seconds, computed from channel 0 at the current rate.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        let len = match &self.samples {
            ClipSamples::Mono(samples) => samples.len(),
            ClipSamples::Stereo { left, .. } => left.len(),
        };
        len as f64 / self.sample_rate as f64
    }

    /// Resamples every channel to `rate` and updates the reported sample rate.
    ///
    /// Channels are converted independently with the same rate pair, so
    /// stereo channels keep equal lengths.
    pub fn resample_to(&mut self, rate: u32) {
        if rate == self.sample_rate || rate == 0 || self.sample_rate == 0 {
            return;
        }
        let from = self.sample_rate;
        self.samples = match std::mem::replace(&mut self.samples, ClipSamples::Mono(Vec::new())) {
            ClipSamples::Mono(samples) => ClipSamples::Mono(resample(samples, from, rate)),
            ClipSamples::Stereo { left, right } => ClipSamples::Stereo {
                left: resample(left, from, rate),
                right: resample(right, from, rate),
            },
        };
        self.sample_rate = rate;
    }
}
