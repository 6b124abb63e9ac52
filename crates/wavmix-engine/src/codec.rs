//! Decode/encode seam between the mixing engine and file formats.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::DecodedAudio;
use crate::error::{EngineError, EngineResult};
use crate::mixer::MixBuffer;
use crate::wav::{self, WavResult};

/// Turns a source path into decoded audio.
pub trait AudioDecoder {
    /// Decodes the file at `path`.
    fn decode(&self, path: &Path) -> EngineResult<DecodedAudio>;
}

/// Writes a finished mix to a file.
pub trait AudioEncoder {
    /// Encodes `buffer` at `bit_depth` and writes it to `path`.
    fn encode(&self, path: &Path, buffer: &MixBuffer, bit_depth: u16) -> EngineResult<WavResult>;
}

/// WAV codec backed by `hound` (decode) and the deterministic writer (encode).
#[derive(Debug, Clone, Copy, Default)]
pub struct WavCodec;

impl AudioDecoder for WavCodec {
    fn decode(&self, path: &Path) -> EngineResult<DecodedAudio> {
        wav::read_wav(path)
    }
}

impl AudioEncoder for WavCodec {
    fn encode(&self, path: &Path, buffer: &MixBuffer, bit_depth: u16) -> EngineResult<WavResult> {
        let result = WavResult::from_buffer(buffer, bit_depth)?;
        // The file is written in one call from the complete byte vector
        fs::write(path, &result.wav_data)
            .map_err(|e| EngineError::encode(path.display().to_string(), e))?;
        Ok(result)
    }
}

/// Decoder serving pre-decoded audio from memory, keyed by path.
///
/// Paths without an entry fail to decode, like missing files.
#[derive(Debug, Clone, Default)]
pub struct MemoryDecoder {
    sources: HashMap<PathBuf, DecodedAudio>,
}

impl MemoryDecoder {
    /// Creates an empty decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers audio for `path`.
    pub fn insert(&mut self, path: impl Into<PathBuf>, audio: DecodedAudio) {
        self.sources.insert(path.into(), audio);
    }

    /// Builder-style [`MemoryDecoder::insert`].
    pub fn with(mut self, path: impl Into<PathBuf>, audio: DecodedAudio) -> Self {
        self.insert(path, audio);
        self
    }
}

impl AudioDecoder for MemoryDecoder {
    fn decode(&self, path: &Path) -> EngineResult<DecodedAudio> {
        self.sources
            .get(path)
            .cloned()
            .ok_or_else(|| EngineError::decode(path.display().to_string(), "no such source"))
    }
}
