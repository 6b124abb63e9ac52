//! RIFF/WAVE writing and PCM conversion.

use std::io::{self, Write};

use super::format::WavFormat;

/// Size of the canonical 44-byte header minus the 8-byte RIFF preamble.
const HEADER_TAIL: u32 = 36;

/// Writes a complete PCM WAV file (RIFF, `fmt `, `data`; no metadata chunks).
///
/// # Arguments
/// * `writer` - Destination for the file bytes
/// * `format` - Channel count, sample rate and bit depth for the `fmt ` chunk
/// * `pcm_data` - Interleaved PCM bytes for the `data` chunk
///
/// # Returns
/// Any error raised by `writer`
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = u32::try_from(pcm_data.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "PCM data exceeds the 4 GiB WAV limit",
        )
    })?;
    let riff_size = data_size.checked_add(HEADER_TAIL).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "PCM data exceeds the 4 GiB WAV limit",
        )
    })?;

    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // PCM fmt chunk size
    writer.write_all(&1u16.to_le_bytes())?; // WAVE_FORMAT_PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file into a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Appends one sample as little-endian integer PCM.
///
/// The sample is clamped to [-1, 1] first. 8-bit output is unsigned with a
/// 128 midpoint, wider depths are signed.
#[inline]
fn push_sample(pcm: &mut Vec<u8>, sample: f64, bits_per_sample: u16) {
    let clipped = sample.clamp(-1.0, 1.0);
    match bits_per_sample {
        8 => pcm.push(((clipped * 127.0).round() as i16 + 128) as u8),
        16 => pcm.extend_from_slice(&((clipped * 32767.0).round() as i16).to_le_bytes()),
        24 => {
            let value = (clipped * 8_388_607.0).round() as i32;
            pcm.extend_from_slice(&value.to_le_bytes()[..3]);
        }
        _ => pcm.extend_from_slice(&((clipped * 2_147_483_647.0).round() as i32).to_le_bytes()),
    }
}

/// Interleaves two channels into integer PCM bytes.
///
/// `bits_per_sample` must be one of 8, 16, 24 or 32; [`WavFormat::stereo`]
/// enforces that before encoding.
///
/// # Arguments
/// * `left` - Left channel samples
/// * `right` - Right channel samples
/// * `bits_per_sample` - Output sample width
///
/// # Returns
/// Interleaved little-endian PCM for the first `min(left.len(), right.len())`
/// frames
pub fn stereo_to_pcm(left: &[f64], right: &[f64], bits_per_sample: u16) -> Vec<u8> {
    let len = left.len().min(right.len());
    let bytes = usize::from(bits_per_sample / 8);
    let mut pcm = Vec::with_capacity(len * 2 * bytes);

    for (&l, &r) in left.iter().zip(right.iter()) {
        push_sample(&mut pcm, l, bits_per_sample);
        push_sample(&mut pcm, r, bits_per_sample);
    }

    pcm
}
