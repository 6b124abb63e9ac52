//! Post-processing: trailing silence trim and peak normalization.

use super::buffer::MixBuffer;

/// Result of peak normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    /// Peak absolute value before normalization.
    pub peak: f64,
    /// Gain applied, or `None` when the peak was already within [-1, 1].
    pub gain: Option<f64>,
}

/// Trims trailing silence from both channels.
///
/// Keeps everything up to and including the last index where either channel's
/// magnitude exceeds `tolerance`. With a tolerance of 0.0 only exact zeros are
/// silence. An entirely silent buffer is truncated to zero length.
///
/// Returns the number of samples removed.
pub fn trim_silence(buffer: &mut MixBuffer, tolerance: f64) -> usize {
    let before = buffer.len();
    let keep = buffer
        .left()
        .iter()
        .zip(buffer.right().iter())
        .rposition(|(l, r)| l.abs() > tolerance || r.abs() > tolerance)
        .map_or(0, |last| last + 1);
    buffer.truncate(keep);
    before - keep
}

/// Scales the buffer so its peak is exactly 1.0, if it exceeds 1.0.
///
/// Audio already within [-1, 1], silence included, is left untouched.
pub fn normalize_peak(buffer: &mut MixBuffer) -> Normalization {
    let peak = buffer.peak();
    if peak <= 1.0 {
        return Normalization { peak, gain: None };
    }

    let gain = 1.0 / peak;
    let (left, right) = buffer.channels_mut();
    for sample in left.iter_mut().chain(right.iter_mut()) {
        *sample *= gain;
    }
    Normalization {
        peak,
        gain: Some(gain),
    }
}

impl MixBuffer {
    /// Trims trailing silence. See [`trim_silence`].
    pub fn trim_silence(&mut self, tolerance: f64) -> usize {
        trim_silence(self, tolerance)
    }

    /// Applies peak normalization. See [`normalize_peak`].
    pub fn normalize_peak(&mut self) -> Normalization {
        normalize_peak(self)
    }
}
