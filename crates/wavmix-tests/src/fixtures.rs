//! Test fixture utilities for creating clip files and manifests on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding source clips and a manifest.
pub struct MixFixture {
    pub root: TempDir,
}

impl MixFixture {
    /// Create a new empty fixture directory.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a 16-bit mono clip.
    pub fn add_mono(&self, name: &str, sample_rate: u32, samples: &[f64]) -> PathBuf {
        let path = self.path().join(name);
        write_int16(&path, sample_rate, &[samples]);
        path
    }

    /// Write a 16-bit stereo clip.
    pub fn add_stereo(&self, name: &str, sample_rate: u32, left: &[f64], right: &[f64]) -> PathBuf {
        let path = self.path().join(name);
        write_int16(&path, sample_rate, &[left, right]);
        path
    }

    /// Write a 32-bit float mono clip.
    pub fn add_mono_float(&self, name: &str, sample_rate: u32, samples: &[f32]) -> PathBuf {
        let path = self.path().join(name);
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut writer = hound::WavWriter::create(&path, spec).expect("Failed to create WAV");
        for &s in samples {
            writer.write_sample(s).expect("Failed to write sample");
        }
        writer.finalize().expect("Failed to finalize WAV");
        path
    }

    /// Write a file that is not a WAV at all.
    pub fn add_garbage(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, b"this is not a riff file").expect("Failed to write garbage file");
        path
    }

    /// Write a manifest from `(path, start, gain)` entries, one clip per line.
    pub fn add_manifest(&self, name: &str, entries: &[(&Path, f64, f64)]) -> PathBuf {
        let text: String = entries
            .iter()
            .map(|(path, start, gain)| format!("{} {} {}\n", path.display(), start, gain))
            .collect();
        self.add_manifest_text(name, &text)
    }

    /// Write a manifest verbatim.
    pub fn add_manifest_text(&self, name: &str, text: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, text).expect("Failed to write manifest");
        path
    }
}

impl Default for MixFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn write_int16(path: &Path, sample_rate: u32, channels: &[&[f64]]) {
    let spec = hound::WavSpec {
        channels: channels.len() as u16,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let frames = channels.iter().map(|c| c.len()).min().unwrap_or(0);
    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create WAV");
    for i in 0..frames {
        for channel in channels {
            let s = (channel[i].clamp(-1.0, 1.0) * 32767.0).round() as i16;
            writer.write_sample(s).expect("Failed to write sample");
        }
    }
    writer.finalize().expect("Failed to finalize WAV");
}

/// A WAV file read back through hound, independent of the engine's reader.
#[derive(Debug, Clone)]
pub struct ReadBack {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub left: Vec<f64>,
    pub right: Vec<f64>,
}

impl ReadBack {
    /// Frames per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Whether the file holds no frames.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// Reads an integer-PCM stereo WAV into normalized channels.
pub fn read_back(path: &Path) -> ReadBack {
    let mut reader = hound::WavReader::open(path).expect("Failed to open output WAV");
    let spec = reader.spec();
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let scale = (1i64 << (spec.bits_per_sample - 1)) as f64;
    let samples: Vec<f64> = reader
        .samples::<i32>()
        .map(|s| s.expect("Failed to read sample") as f64 / scale)
        .collect();

    let channels = spec.channels as usize;
    let left = samples.iter().step_by(channels).copied().collect();
    let right = samples.iter().skip(1).step_by(channels).copied().collect();

    ReadBack {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        left,
        right,
    }
}
