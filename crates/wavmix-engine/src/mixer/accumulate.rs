//! Places decoded clips into the mix buffer.

use wavmix_manifest::Clip;

use super::buffer::{sample_index, MixBuffer};
use crate::audio::DecodedAudio;
use crate::error::EngineResult;

/// Outcome of accumulating one clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accumulation {
    /// First absolute sample index written.
    pub start_index: usize,
    /// Nominal end index (exclusive).
    pub end_index: usize,
    /// Number of sample frames actually added.
    pub written: usize,
    /// True when the clip ran out of samples before `end_index`.
    pub truncated: bool,
}

/// Adds `audio`, scaled by the clip gain, into `buffer` at the clip start.
///
/// `audio` is expected to be at the buffer's sample rate already. Mono audio
/// is added to both channels. The buffer grows to exactly the clip's nominal
/// end when that lies past the current length; any write index still past the
/// end grows it by doubling.
///
/// # Arguments
/// * `buffer` - Mix buffer to add into
/// * `clip` - Start time and gain
/// * `audio` - Decoded clip samples at the buffer's rate
///
/// # Returns
/// Where the clip landed and how many frames were written.
///
/// # Errors
/// [`EngineError::BufferTooLarge`](crate::EngineError::BufferTooLarge) when
/// the clip would end past the longest supported mix.
pub fn accumulate(
    buffer: &mut MixBuffer,
    clip: &Clip,
    audio: &DecodedAudio,
) -> EngineResult<Accumulation> {
    let rate = buffer.sample_rate() as f64;
    let start_index = sample_index((clip.start_time * rate).round())?;
    let end_index = sample_index(((clip.start_time + audio.duration_seconds()) * rate).floor())?;

    if end_index > buffer.len() {
        buffer.grow_to(end_index)?;
    }

    let samples = audio.samples();
    let mut written = 0;
    let mut truncated = false;

    for i in start_index..end_index {
        let count = i - start_index;
        let Some((left, right)) = samples.frame(count) else {
            truncated = true;
            break;
        };

        if i >= buffer.len() {
            buffer.grow_at_least(i + 1)?;
        }
        buffer.add(i, left * clip.gain, right * clip.gain);
        written += 1;
    }

    Ok(Accumulation {
        start_index,
        end_index,
        written,
        truncated,
    })
}
