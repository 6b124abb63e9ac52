//! PCM payload lookup and hashing.

/// Iterates over the `(id, body)` chunks of a RIFF/WAVE file.
///
/// Stops at the first truncated chunk. Returns `None` for anything that is
/// not a RIFF/WAVE container.
fn chunks(wav_data: &[u8]) -> Option<impl Iterator<Item = (&[u8], &[u8])>> {
    if wav_data.len() < 12 || &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    Some(std::iter::from_fn(move || {
        let header = wav_data.get(pos..pos + 8)?;
        let size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]) as usize;
        let body = wav_data.get(pos + 8..pos + 8 + size)?;
        // Chunks are word aligned
        pos += 8 + size + (size & 1);
        Some((&header[..4], body))
    }))
}

/// Returns the body of the `data` chunk of a WAV file.
///
/// Used to compare WAV files by their audio content only.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    chunks(wav_data)?
        .find(|(id, _)| *id == b"data")
        .map(|(_, body)| body)
}

/// BLAKE3 hex hash of raw PCM bytes.
pub fn hash_pcm(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// BLAKE3 hex hash of a WAV file's `data` chunk, or `None` if there is none.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(hash_pcm)
}
