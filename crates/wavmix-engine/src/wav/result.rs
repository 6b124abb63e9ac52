//! Encoded mix result type.

use crate::error::{EngineError, EngineResult};
use crate::mixer::MixBuffer;

use super::format::WavFormat;
use super::pcm::hash_pcm;
use super::writer::{stereo_to_pcm, write_wav_to_vec};

/// An encoded stereo WAV file.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Number of samples per channel.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes a mix buffer as stereo integer PCM.
    pub fn from_buffer(buffer: &MixBuffer, bits_per_sample: u16) -> EngineResult<Self> {
        let format = WavFormat::stereo(buffer.sample_rate(), bits_per_sample)?;
        let pcm = stereo_to_pcm(buffer.left(), buffer.right(), bits_per_sample);
        let pcm_hash = hash_pcm(&pcm);
        let wav_data = write_wav_to_vec(&format, &pcm)
            .map_err(|e| EngineError::encode("<memory>", e))?;

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate: buffer.sample_rate(),
            bits_per_sample,
            num_samples: buffer.len(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
