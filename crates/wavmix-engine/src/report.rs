//! Mix report types.

use serde::{Deserialize, Serialize};

/// What happened to a clip during mixing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipStatus {
    /// Fully accumulated.
    Mixed,
    /// Accumulated until its samples ran out before the nominal end.
    Truncated,
    /// Not accumulated (decode failure or unsupported layout).
    Skipped,
}

/// Per-clip report entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipReport {
    /// Position in the manifest (0-based).
    pub index: usize,
    /// Source path as written in the manifest.
    pub source: String,
    /// Start time in seconds.
    pub start_time: f64,
    /// Gain applied.
    pub gain: f64,
    /// Outcome.
    pub status: ClipStatus,
    /// Why the clip was skipped or truncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Sample rate of the decoded source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_sample_rate: Option<u32>,
    /// Channel count of the decoded source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_channels: Option<usize>,
    /// Whether the clip was resampled to the output rate.
    pub resampled: bool,
    /// First output sample index written.
    pub start_index: usize,
    /// Number of sample frames added to the mix.
    pub samples_written: usize,
}

impl ClipReport {
    pub(crate) fn skipped(
        index: usize,
        source: String,
        start_time: f64,
        gain: f64,
        reason: String,
    ) -> Self {
        Self {
            index,
            source,
            start_time,
            gain,
            status: ClipStatus::Skipped,
            reason: Some(reason),
            source_sample_rate: None,
            source_channels: None,
            resampled: false,
            start_index: 0,
            samples_written: 0,
        }
    }
}

/// Summary of a finished mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixReport {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Final length in samples per channel.
    pub length_samples: usize,
    /// Final length in seconds.
    pub duration_seconds: f64,
    /// Samples removed by the trailing silence trim.
    pub trimmed_samples: usize,
    /// Peak absolute value before normalization.
    pub peak_before_normalize: f64,
    /// Normalization gain, if one was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize_gain: Option<f64>,
    /// Per-clip entries in manifest order.
    pub clips: Vec<ClipReport>,
}

impl MixReport {
    /// Number of clips that contributed audio.
    pub fn mixed_count(&self) -> usize {
        self.clips
            .iter()
            .filter(|c| c.status != ClipStatus::Skipped)
            .count()
    }

    /// Number of skipped clips.
    pub fn skipped_count(&self) -> usize {
        self.clips.len() - self.mixed_count()
    }

    /// Number of truncated clips.
    pub fn truncated_count(&self) -> usize {
        self.clips
            .iter()
            .filter(|c| c.status == ClipStatus::Truncated)
            .count()
    }
}
