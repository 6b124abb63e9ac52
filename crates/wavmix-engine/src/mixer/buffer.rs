//! Growable stereo mix buffer.

use crate::error::{EngineError, EngineResult};

/// Largest mix length in samples per channel.
///
/// A 32-bit stereo WAV data chunk holds at most `u32::MAX` bytes, so nothing
/// longer could be written out.
pub const MAX_MIX_SAMPLES: usize = (u32::MAX / 8) as usize;

fn too_large(samples: f64) -> EngineError {
    EngineError::BufferTooLarge {
        samples,
        limit: MAX_MIX_SAMPLES,
    }
}

/// Converts a sample position computed in floating point into an index.
///
/// Fractions are truncated, so callers round or floor first. NaN and
/// anything past [`MAX_MIX_SAMPLES`] are rejected.
pub(crate) fn sample_index(position: f64) -> EngineResult<usize> {
    if position.is_nan() || position > MAX_MIX_SAMPLES as f64 {
        return Err(too_large(position));
    }
    Ok(position.max(0.0) as usize)
}

/// Absolute-time indexed stereo buffer.
///
/// Both channels always have the same length. Samples that no clip has
/// written to are exactly 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct MixBuffer {
    /// Sample rate in Hz.
    sample_rate: u32,
    /// Left channel samples.
    left: Vec<f64>,
    /// Right channel samples.
    right: Vec<f64>,
}

impl MixBuffer {
    /// Creates a zero-filled buffer with `len` samples per channel.
    ///
    /// Allocates like `vec!`. Lengths derived from manifest input go through
    /// [`MixBuffer::from_start_hint`] or the growth methods instead.
    pub fn new(sample_rate: u32, len: usize) -> Self {
        Self {
            sample_rate,
            left: vec![0.0; len],
            right: vec![0.0; len],
        }
    }

    /// Creates a buffer pre-allocated up to the latest clip start.
    ///
    /// The length is `max_start_seconds * sample_rate`, truncated. It is only
    /// a hint: accumulation grows the buffer as needed.
    ///
    /// # Errors
    /// [`EngineError::BufferTooLarge`] when the length exceeds
    /// [`MAX_MIX_SAMPLES`] or cannot be allocated.
    pub fn from_start_hint(sample_rate: u32, max_start_seconds: f64) -> EngineResult<Self> {
        let len = sample_index(max_start_seconds.max(0.0) * sample_rate as f64)?;
        let mut buffer = Self::new(sample_rate, 0);
        buffer.grow_to(len)?;
        Ok(buffer)
    }

    /// Builds a buffer from existing channel data.
    ///
    /// The shorter channel is zero-padded so both have equal length.
    pub fn from_channels(sample_rate: u32, mut left: Vec<f64>, mut right: Vec<f64>) -> Self {
        let len = left.len().max(right.len());
        left.resize(len, 0.0);
        right.resize(len, 0.0);
        Self {
            sample_rate,
            left,
            right,
        }
    }

    /// Returns the sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Gets the number of samples per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.len() as f64 / self.sample_rate as f64
    }

    /// Left channel samples.
    pub fn left(&self) -> &[f64] {
        &self.left
    }

    /// Right channel samples.
    pub fn right(&self) -> &[f64] {
        &self.right
    }

    /// Exact growth policy: grows to exactly `required` samples.
    ///
    /// No-op when the buffer is already at least that long. Existing samples
    /// are kept and the new region is zero-filled.
    ///
    /// # Errors
    /// [`EngineError::BufferTooLarge`] when `required` exceeds
    /// [`MAX_MIX_SAMPLES`] or cannot be allocated; the buffer is unchanged.
    pub fn grow_to(&mut self, required: usize) -> EngineResult<()> {
        if self.len() >= required {
            return Ok(());
        }
        self.resize_channels(required)
    }

    /// Doubling growth policy: doubles the length (starting from 1) until it
    /// is at least `required`.
    ///
    /// No-op when the buffer is already at least that long. Doubling stops
    /// at [`MAX_MIX_SAMPLES`].
    ///
    /// # Errors
    /// [`EngineError::BufferTooLarge`] when `required` exceeds
    /// [`MAX_MIX_SAMPLES`] or cannot be allocated; the buffer is unchanged.
    pub fn grow_at_least(&mut self, required: usize) -> EngineResult<()> {
        if self.len() >= required {
            return Ok(());
        }
        let mut new_len = self.len().max(1);
        while new_len < required {
            new_len = new_len.saturating_mul(2);
        }
        self.resize_channels(new_len.min(MAX_MIX_SAMPLES).max(required))
    }

    fn resize_channels(&mut self, new_len: usize) -> EngineResult<()> {
        if new_len > MAX_MIX_SAMPLES {
            return Err(too_large(new_len as f64));
        }
        let additional = new_len.saturating_sub(self.len());
        self.left
            .try_reserve_exact(additional)
            .and_then(|_| self.right.try_reserve_exact(additional))
            .map_err(|_| too_large(new_len as f64))?;
        self.left.resize(new_len, 0.0);
        self.right.resize(new_len, 0.0);
        Ok(())
    }

    /// Adds a sample pair at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. Callers grow the buffer first.
    #[inline]
    pub(crate) fn add(&mut self, index: usize, left: f64, right: f64) {
        self.left[index] += left;
        self.right[index] += right;
    }

    /// Shortens both channels to `len` samples. Never lengthens.
    pub fn truncate(&mut self, len: usize) {
        self.left.truncate(len);
        self.right.truncate(len);
    }

    /// Peak absolute value across both channels.
    pub fn peak(&self) -> f64 {
        self.left
            .iter()
            .chain(self.right.iter())
            .map(|s| s.abs())
            .fold(0.0_f64, |a, b| a.max(b))
    }

    pub(crate) fn channels_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.left, &mut self.right)
    }
}
