//! Clip placement type.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A single audio clip placed on the output timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Path of the source audio file.
    pub source: PathBuf,
    /// Start time in seconds (non-negative).
    pub start_time: f64,
    /// Linear gain applied to every sample (non-negative).
    pub gain: f64,
}

impl Clip {
    /// Creates a new clip.
    pub fn new(source: impl Into<PathBuf>, start_time: f64, gain: f64) -> Self {
        Self {
            source: source.into(),
            start_time,
            gain,
        }
    }

    /// Returns the source path.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Returns the latest start time across all clips, or 0.0 for an empty slice.
pub fn max_start_time(clips: &[Clip]) -> f64 {
    clips
        .iter()
        .map(|clip| clip.start_time)
        .fold(0.0_f64, f64::max)
}
