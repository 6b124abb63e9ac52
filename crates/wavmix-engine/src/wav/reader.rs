//! WAV decoding via `hound`.

use std::io::Read;
use std::path::Path;

use hound::{SampleFormat, WavReader};

use crate::audio::DecodedAudio;
use crate::error::{EngineError, EngineResult};

/// Decodes a WAV file from disk into planar `f64` channels.
///
/// # Returns
/// The decoded audio, or a clip-local error when the file cannot be opened,
/// is not a supported WAV, or has more than two channels.
pub fn read_wav(path: &Path) -> EngineResult<DecodedAudio> {
    let display = path.display().to_string();
    let reader = WavReader::open(path).map_err(|e| EngineError::decode(&display, e))?;
    decode_reader(reader, &display)
}

/// Decodes WAV bytes held in memory.
pub fn read_wav_bytes(bytes: &[u8], label: &str) -> EngineResult<DecodedAudio> {
    let reader = WavReader::new(bytes).map_err(|e| EngineError::decode(label, e))?;
    decode_reader(reader, label)
}

fn decode_reader<R: Read>(reader: WavReader<R>, label: &str) -> EngineResult<DecodedAudio> {
    let spec = reader.spec();
    let channels = usize::from(spec.channels);
    if channels == 0 || channels > 2 {
        return Err(EngineError::UnsupportedChannels { channels });
    }

    // Samples normalized to [-1.0, 1.0], still interleaved
    let interleaved: Vec<f64> = match spec.sample_format {
        SampleFormat::Int => {
            if !(8..=32).contains(&spec.bits_per_sample) {
                return Err(EngineError::decode(
                    label,
                    format!("unsupported bit depth: {}", spec.bits_per_sample),
                ));
            }
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<_, _>>()
                .map_err(|e| EngineError::decode(label, e))?
        }
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<_, _>>()
            .map_err(|e| EngineError::decode(label, e))?,
    };

    let frames = interleaved.len() / channels;
    let mut planar = vec![Vec::with_capacity(frames); channels];
    for frame in interleaved.chunks_exact(channels) {
        for (channel, &sample) in planar.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }

    log::debug!(
        "decoded {}: {} Hz, {} ch, {} samples",
        label,
        spec.sample_rate,
        channels,
        frames
    );
    DecodedAudio::from_channels(spec.sample_rate, planar)
}
