//! Tests for clip accumulation.

use wavmix_manifest::Clip;

use super::*;
use crate::audio::DecodedAudio;

const RATE: u32 = 1024;

/// Seconds for `samples` at `RATE`, exact in binary.
fn at(samples: usize) -> f64 {
    samples as f64 / RATE as f64
}

#[test]
fn test_single_mono_clip_at_zero() {
    let samples = vec![0.1, 0.2, 0.3, 0.4];
    let audio = DecodedAudio::mono(RATE, samples.clone());
    let clip = Clip::new("a.wav", 0.0, 0.5);
    let mut buffer = MixBuffer::new(RATE, 0);

    let result = accumulate(&mut buffer, &clip, &audio).unwrap();

    assert_eq!(result.start_index, 0);
    assert_eq!(result.end_index, 4);
    assert_eq!(result.written, 4);
    assert!(!result.truncated);
    assert_eq!(buffer.len(), 4);
    for (i, &s) in samples.iter().enumerate() {
        assert_eq!(buffer.left()[i], s * 0.5);
        assert_eq!(buffer.right()[i], s * 0.5);
    }
}

#[test]
fn test_clip_offset_leaves_leading_zeros() {
    let audio = DecodedAudio::mono(RATE, vec![1.0; 5]);
    let clip = Clip::new("a.wav", at(10), 1.0);
    let mut buffer = MixBuffer::new(RATE, 0);

    let result = accumulate(&mut buffer, &clip, &audio).unwrap();

    assert_eq!(result.start_index, 10);
    assert_eq!(result.end_index, 15);
    assert_eq!(buffer.len(), 15);
    assert!(buffer.left()[..10].iter().all(|&s| s == 0.0));
    assert!(buffer.left()[10..].iter().all(|&s| s == 1.0));
}

#[test]
fn test_stereo_clip_keeps_channels_separate() {
    let audio = DecodedAudio::stereo(RATE, vec![1.0, 1.0], vec![-1.0, -0.5]);
    let clip = Clip::new("s.wav", 0.0, 0.5);
    let mut buffer = MixBuffer::new(RATE, 2);

    accumulate(&mut buffer, &clip, &audio).unwrap();

    assert_eq!(buffer.left(), &[0.5, 0.5]);
    assert_eq!(buffer.right(), &[-0.5, -0.25]);
}

#[test]
fn test_overlapping_clips_superpose() {
    let a = DecodedAudio::mono(RATE, vec![0.25; 6]);
    let b = DecodedAudio::stereo(RATE, vec![0.5; 4], vec![0.125; 4]);
    let mut buffer = MixBuffer::new(RATE, 0);

    accumulate(&mut buffer, &Clip::new("a.wav", 0.0, 1.0), &a).unwrap();
    accumulate(&mut buffer, &Clip::new("b.wav", at(2), 1.0), &b).unwrap();

    assert_eq!(buffer.len(), 6);
    assert_eq!(buffer.left(), &[0.25, 0.25, 0.75, 0.75, 0.75, 0.75]);
    assert_eq!(buffer.right(), &[0.25, 0.25, 0.375, 0.375, 0.375, 0.375]);
}

#[test]
fn test_clip_within_preallocated_buffer_does_not_grow() {
    let audio = DecodedAudio::mono(RATE, vec![1.0; 3]);
    let mut buffer = MixBuffer::new(RATE, 100);

    accumulate(&mut buffer, &Clip::new("a.wav", 0.0, 1.0), &audio).unwrap();

    assert_eq!(buffer.len(), 100);
}

#[test]
fn test_end_past_capacity_grows_exactly() {
    let audio = DecodedAudio::mono(RATE, vec![1.0; 30]);
    let mut buffer = MixBuffer::new(RATE, 20);

    accumulate(&mut buffer, &Clip::new("a.wav", 0.0, 1.0), &audio).unwrap();

    // Exact growth, not doubling
    assert_eq!(buffer.len(), 30);
}

#[test]
fn test_zero_gain_writes_zeros() {
    let audio = DecodedAudio::mono(RATE, vec![1.0; 4]);
    let mut buffer = MixBuffer::new(RATE, 0);

    let result = accumulate(&mut buffer, &Clip::new("a.wav", 0.0, 0.0), &audio).unwrap();

    assert_eq!(result.written, 4);
    assert!(buffer.left().iter().all(|&s| s == 0.0));
}

#[test]
fn test_empty_clip_writes_nothing() {
    let audio = DecodedAudio::mono(RATE, Vec::new());
    let mut buffer = MixBuffer::new(RATE, 0);

    let result = accumulate(&mut buffer, &Clip::new("a.wav", at(512), 1.0), &audio).unwrap();

    assert_eq!(result.written, 0);
    assert!(!result.truncated);
}

#[test]
fn test_short_stereo_channel_truncates() {
    // Left is nominal length, right runs out first
    let audio = DecodedAudio::stereo(RATE, vec![1.0; 5], vec![1.0; 3]);
    let mut buffer = MixBuffer::new(RATE, 0);

    let result = accumulate(&mut buffer, &Clip::new("a.wav", 0.0, 1.0), &audio).unwrap();

    assert!(result.truncated);
    assert_eq!(result.written, 3);
    assert_eq!(result.end_index, 5);
    assert_eq!(buffer.left(), &[1.0, 1.0, 1.0, 0.0, 0.0]);
}

#[test]
fn test_start_past_limit_is_an_error() {
    let audio = DecodedAudio::mono(RATE, vec![0.5; 4]);
    let mut buffer = MixBuffer::new(RATE, 0);

    let err = accumulate(&mut buffer, &Clip::new("a.wav", 1e15, 1.0), &audio).unwrap_err();

    assert!(matches!(err, crate::EngineError::BufferTooLarge { .. }));
    assert!(buffer.is_empty());
}

#[test]
fn test_end_past_limit_is_an_error() {
    // Starts exactly at the limit, so only the clip end overflows
    let start = MAX_MIX_SAMPLES as f64 / RATE as f64;
    let audio = DecodedAudio::mono(RATE, vec![0.5; RATE as usize]);
    let mut buffer = MixBuffer::new(RATE, 0);

    let err = accumulate(&mut buffer, &Clip::new("a.wav", start, 1.0), &audio).unwrap_err();

    assert!(matches!(err, crate::EngineError::BufferTooLarge { .. }));
    assert!(buffer.is_empty());
}
