//! Clip mixing into a growable stereo buffer.
//!
//! This module places decoded clips at their start offsets with per-clip
//! gain, then trims trailing silence and peak-normalizes the result.

mod accumulate;
mod buffer;
mod processing;

#[cfg(test)]
mod tests_accumulate;
#[cfg(test)]
mod tests_buffer;
#[cfg(test)]
mod tests_processing;

// Re-export public API
pub use accumulate::{accumulate, Accumulation};
pub use buffer::{MixBuffer, MAX_MIX_SAMPLES};
pub use processing::{normalize_peak, trim_silence, Normalization};
