//! The mixing pass: decode, resample, accumulate, trim, normalize.

use wavmix_manifest::{max_start_time, Clip};

use crate::codec::AudioDecoder;
use crate::error::{EngineError, EngineResult};
use crate::mixer::{accumulate, MixBuffer};
use crate::report::{ClipReport, ClipStatus, MixReport};
use crate::settings::MixSettings;

/// A finished, post-processed mix.
#[derive(Debug, Clone)]
pub struct MixOutcome {
    /// Trimmed and normalized stereo buffer.
    pub buffer: MixBuffer,
    /// What happened along the way.
    pub report: MixReport,
}

/// Mixes `clips` in manifest order into one stereo buffer.
///
/// A clip that fails to decode is logged and skipped; the mix only fails when
/// no clip could be decoded at all.
///
/// # Arguments
/// * `clips` - Clips in manifest order
/// * `decoder` - Source of decoded clip audio
/// * `settings` - Output rate, bit depth and trim tolerance
///
/// # Returns
/// The trimmed, normalized buffer and a report of what happened to each clip.
///
/// # Errors
/// - [`EngineError::InvalidSampleRate`] and friends for bad settings
/// - [`EngineError::NoClips`] for an empty clip list
/// - [`EngineError::BufferTooLarge`] when a clip starts or ends past the
///   longest supported mix
/// - [`EngineError::NoValidClips`] when every clip was skipped
/// - [`EngineError::EmptyMix`] when nothing audible remains after trimming
pub fn mix_clips<D>(clips: &[Clip], decoder: &D, settings: &MixSettings) -> EngineResult<MixOutcome>
where
    D: AudioDecoder + ?Sized,
{
    settings.validate()?;
    if clips.is_empty() {
        return Err(EngineError::NoClips);
    }

    let mut buffer = MixBuffer::from_start_hint(settings.sample_rate, max_start_time(clips))?;
    let mut entries = Vec::with_capacity(clips.len());

    for (index, clip) in clips.iter().enumerate() {
        entries.push(mix_clip(&mut buffer, index, clip, decoder)?);
    }

    if entries.iter().all(|e| e.status == ClipStatus::Skipped) {
        return Err(EngineError::NoValidClips { count: clips.len() });
    }

    let trimmed_samples = buffer.trim_silence(settings.trim_tolerance);
    if buffer.is_empty() {
        return Err(EngineError::EmptyMix);
    }

    let normalization = buffer.normalize_peak();
    if let Some(gain) = normalization.gain {
        log::info!(
            "normalized audio (max = {}) -> gain = {}",
            normalization.peak,
            gain
        );
    }

    let report = MixReport {
        sample_rate: buffer.sample_rate(),
        length_samples: buffer.len(),
        duration_seconds: buffer.duration_seconds(),
        trimmed_samples,
        peak_before_normalize: normalization.peak,
        normalize_gain: normalization.gain,
        clips: entries,
    };

    Ok(MixOutcome { buffer, report })
}

/// Decodes, resamples and accumulates a single clip.
///
/// Clip-local failures end here as a skipped entry; buffer limits are fatal.
fn mix_clip<D>(
    buffer: &mut MixBuffer,
    index: usize,
    clip: &Clip,
    decoder: &D,
) -> EngineResult<ClipReport>
where
    D: AudioDecoder + ?Sized,
{
    let source = clip.source.display().to_string();

    let mut audio = match decoder.decode(&clip.source) {
        Ok(audio) => audio,
        Err(err) => {
            log::warn!("skipping clip {} ({}): {}", index, source, err);
            return Ok(ClipReport::skipped(
                index,
                source,
                clip.start_time,
                clip.gain,
                err.to_string(),
            ));
        }
    };

    let source_sample_rate = audio.sample_rate();
    let source_channels = audio.channels();
    log::debug!(
        "loaded {} ({} Hz, {} ch, {} s)",
        source,
        source_sample_rate,
        source_channels,
        audio.duration_seconds()
    );

    let resampled = source_sample_rate != buffer.sample_rate();
    if resampled {
        log::info!(
            "resampling {} from {} to {} Hz",
            source,
            source_sample_rate,
            buffer.sample_rate()
        );
        audio.resample_to(buffer.sample_rate());
    }

    let acc = accumulate(buffer, clip, &audio)?;
    let (status, reason) = if acc.truncated {
        let reason = format!(
            "ran out of samples after {} of {}",
            acc.written,
            acc.end_index.saturating_sub(acc.start_index)
        );
        log::warn!("clip {} ({}) truncated: {}", index, source, reason);
        (ClipStatus::Truncated, Some(reason))
    } else {
        (ClipStatus::Mixed, None)
    };

    Ok(ClipReport {
        index,
        source,
        start_time: clip.start_time,
        gain: clip.gain,
        status,
        reason,
        source_sample_rate: Some(source_sample_rate),
        source_channels: Some(source_channels),
        resampled,
        start_index: acc.start_index,
        samples_written: acc.written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::DecodedAudio;
    use crate::codec::MemoryDecoder;
    use wavmix_manifest::{parse_manifest, Strictness};

    const RATE: u32 = 44100;

    fn settings() -> MixSettings {
        MixSettings::with_sample_rate(RATE)
    }

    #[test]
    fn test_two_clip_scenario() {
        let decoder = MemoryDecoder::new()
            .with("a.wav", DecodedAudio::mono(RATE, vec![1.0; 88200]))
            .with(
                "b.wav",
                DecodedAudio::stereo(RATE, vec![1.0; 44100], vec![1.0; 44100]),
            );
        let clips = vec![Clip::new("a.wav", 0.0, 1.0), Clip::new("b.wav", 1.0, 0.5)];

        let outcome = mix_clips(&clips, &decoder, &settings()).unwrap();
        let buffer = &outcome.buffer;

        assert_eq!(buffer.len(), 88200);
        assert_eq!(outcome.report.peak_before_normalize, 1.5);
        let gain = outcome.report.normalize_gain.unwrap();
        assert!((gain - 1.0 / 1.5).abs() < 1e-12);

        for i in [0, 1000, 44099] {
            assert!((buffer.left()[i] - 1.0 / 1.5).abs() < 1e-9);
            assert!((buffer.right()[i] - 1.0 / 1.5).abs() < 1e-9);
        }
        for i in [44100, 60000, 88199] {
            assert!((buffer.left()[i] - 1.0).abs() < 1e-9);
            assert!((buffer.right()[i] - 1.0).abs() < 1e-9);
        }
        assert_eq!(outcome.report.mixed_count(), 2);
    }

    #[test]
    fn test_undecodable_clip_is_skipped() {
        let decoder = MemoryDecoder::new().with("ok.wav", DecodedAudio::mono(RATE, vec![0.5; 11025]));
        let clips = vec![
            Clip::new("missing.wav", 0.0, 1.0),
            Clip::new("ok.wav", 0.0, 1.0),
        ];

        let outcome = mix_clips(&clips, &decoder, &settings()).unwrap();

        assert_eq!(outcome.report.skipped_count(), 1);
        assert_eq!(outcome.report.clips[0].status, ClipStatus::Skipped);
        assert!(outcome.report.clips[0]
            .reason
            .as_deref()
            .unwrap()
            .contains("missing.wav"));
        assert_eq!(outcome.buffer.len(), 11025);
    }

    #[test]
    fn test_all_clips_undecodable_is_fatal() {
        let decoder = MemoryDecoder::new();
        let clips = vec![Clip::new("a.wav", 0.0, 1.0), Clip::new("b.wav", 1.0, 1.0)];

        let err = mix_clips(&clips, &decoder, &settings()).unwrap_err();
        assert!(matches!(err, EngineError::NoValidClips { count: 2 }));
    }

    #[test]
    fn test_empty_clip_list_is_fatal() {
        let err = mix_clips(&[], &MemoryDecoder::new(), &settings()).unwrap_err();
        assert!(matches!(err, EngineError::NoClips));
    }

    #[test]
    fn test_silent_mix_is_fatal() {
        let decoder = MemoryDecoder::new().with("a.wav", DecodedAudio::mono(RATE, vec![0.0; 100]));
        let clips = vec![Clip::new("a.wav", 0.0, 1.0)];

        let err = mix_clips(&clips, &decoder, &settings()).unwrap_err();
        assert!(matches!(err, EngineError::EmptyMix));
    }

    #[test]
    fn test_invalid_sample_rate_is_fatal() {
        let clips = vec![Clip::new("a.wav", 0.0, 1.0)];
        let err = mix_clips(&clips, &MemoryDecoder::new(), &MixSettings::with_sample_rate(0))
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidSampleRate { rate: 0 }));
    }

    #[test]
    fn test_clip_at_other_rate_is_resampled() {
        let decoder = MemoryDecoder::new().with("lo.wav", DecodedAudio::mono(22050, vec![0.5; 22050]));
        let clips = vec![Clip::new("lo.wav", 0.0, 1.0)];

        let outcome = mix_clips(&clips, &decoder, &settings()).unwrap();

        assert_eq!(outcome.buffer.len(), 44100);
        assert!(outcome.report.clips[0].resampled);
        assert_eq!(outcome.report.clips[0].source_sample_rate, Some(22050));
        assert!(outcome.buffer.left().iter().all(|&s| (s - 0.5).abs() < 1e-12));
    }

    #[test]
    fn test_trailing_silence_is_trimmed() {
        let mut samples = vec![0.25; 11025];
        samples.extend(vec![0.0; 11025]);
        let decoder = MemoryDecoder::new().with("a.wav", DecodedAudio::mono(RATE, samples));
        let clips = vec![Clip::new("a.wav", 0.0, 1.0)];

        let outcome = mix_clips(&clips, &decoder, &settings()).unwrap();

        assert_eq!(outcome.buffer.len(), 11025);
        assert_eq!(outcome.report.trimmed_samples, 11025);
        assert_eq!(outcome.report.normalize_gain, None);
    }

    #[test]
    fn test_start_time_past_buffer_limit_is_fatal() {
        let clips = parse_manifest("a.wav 1e15 1.0", Strictness::Strict).unwrap();
        let decoder = MemoryDecoder::new().with("a.wav", DecodedAudio::mono(RATE, vec![0.5; 10]));

        let err = mix_clips(&clips, &decoder, &MixSettings::default()).unwrap_err();

        assert!(matches!(err, EngineError::BufferTooLarge { .. }));
        assert_eq!(err.code(), "ENG_011");
    }

    #[test]
    fn test_start_hint_grows_for_late_clip() {
        // Pre-allocation covers only the latest start, not the clip body
        let decoder = MemoryDecoder::new().with("a.wav", DecodedAudio::mono(RATE, vec![0.5; 11025]));
        let clips = vec![Clip::new("a.wav", 0.5, 1.0)];

        let outcome = mix_clips(&clips, &decoder, &settings()).unwrap();

        assert_eq!(outcome.report.clips[0].start_index, 22050);
        assert_eq!(outcome.buffer.len(), 22050 + 11025);
    }
}
