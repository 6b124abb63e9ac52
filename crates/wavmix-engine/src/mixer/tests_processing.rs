//! Tests for trimming and peak normalization.

use super::*;

fn stereo(left: Vec<f64>, right: Vec<f64>) -> MixBuffer {
    MixBuffer::from_channels(44100, left, right)
}

// =========================================================================
// Trim tests
// =========================================================================

#[test]
fn test_trim_removes_trailing_zeros() {
    let mut buffer = stereo(vec![0.5, 0.0, 0.2, 0.0, 0.0], vec![0.0; 5]);
    let removed = trim_silence(&mut buffer, 0.0);

    assert_eq!(removed, 2);
    assert_eq!(buffer.left(), &[0.5, 0.0, 0.2]);
    assert_eq!(buffer.right().len(), 3);
}

#[test]
fn test_trim_keeps_sample_present_in_either_channel() {
    let mut buffer = stereo(vec![0.5, 0.0, 0.0, 0.0], vec![0.0, 0.0, -0.1, 0.0]);
    trim_silence(&mut buffer, 0.0);
    assert_eq!(buffer.len(), 3);
    assert_eq!(buffer.right()[2], -0.1);
}

#[test]
fn test_trim_strict_zero_keeps_tiny_values() {
    let mut buffer = stereo(vec![0.5, 1e-9, 0.0], vec![0.0; 3]);
    trim_silence(&mut buffer, 0.0);
    assert_eq!(buffer.len(), 2);
}

#[test]
fn test_trim_tolerance_treats_tiny_values_as_silence() {
    let mut buffer = stereo(vec![0.5, 1e-9, -1e-7, 0.0], vec![0.0, 0.0, 5e-7, 0.0]);
    trim_silence(&mut buffer, 1e-6);
    assert_eq!(buffer.len(), 1);
}

#[test]
fn test_trim_leading_silence_is_kept() {
    let mut buffer = stereo(vec![0.0, 0.0, 0.3], vec![0.0; 3]);
    let removed = trim_silence(&mut buffer, 0.0);
    assert_eq!(removed, 0);
    assert_eq!(buffer.len(), 3);
}

#[test]
fn test_trim_all_silent_buffer_becomes_empty() {
    let mut buffer = stereo(vec![0.0; 8], vec![0.0; 8]);
    let removed = trim_silence(&mut buffer, 0.0);
    assert_eq!(removed, 8);
    assert!(buffer.is_empty());
}

#[test]
fn test_trim_never_grows() {
    let mut buffer = stereo(vec![0.1; 4], vec![0.1; 4]);
    let removed = buffer.trim_silence(0.0);
    assert_eq!(removed, 0);
    assert_eq!(buffer.len(), 4);
}

// =========================================================================
// Normalization tests
// =========================================================================

#[test]
fn test_normalize_loud_audio() {
    let mut buffer = stereo(vec![2.0, -1.5], vec![3.0, -2.5]);
    let result = normalize_peak(&mut buffer);

    assert_eq!(result.peak, 3.0);
    assert!((result.gain.unwrap() - 1.0 / 3.0).abs() < 1e-12);
    assert!((buffer.peak() - 1.0).abs() < 1e-12);
}

#[test]
fn test_normalize_uses_global_peak() {
    let mut buffer = stereo(vec![1.0], vec![2.0]);
    normalize_peak(&mut buffer);

    assert!((buffer.right()[0] - 1.0).abs() < 1e-12);
    assert!((buffer.left()[0] - 0.5).abs() < 1e-12);
}

#[test]
fn test_normalize_negative_peak() {
    let mut buffer = stereo(vec![0.5, -4.0], vec![1.0, 0.0]);
    normalize_peak(&mut buffer);
    assert!((buffer.left()[1] + 1.0).abs() < 1e-12);
    assert!((buffer.right()[0] - 0.25).abs() < 1e-12);
}

#[test]
fn test_normalize_leaves_bounded_audio_unchanged() {
    let mut buffer = stereo(vec![0.5, -1.0, 0.25], vec![0.9, 0.0, -0.3]);
    let before = buffer.clone();
    let result = normalize_peak(&mut buffer);

    assert_eq!(result.gain, None);
    assert_eq!(result.peak, 1.0);
    assert_eq!(buffer, before);
}

#[test]
fn test_normalize_silent_audio() {
    let mut buffer = stereo(vec![0.0; 4], vec![0.0; 4]);
    let result = buffer.normalize_peak();

    assert_eq!(result.gain, None);
    assert!(buffer.left().iter().all(|&s| s == 0.0));
}

#[test]
fn test_normalize_preserves_relative_amplitudes() {
    let mut buffer = stereo(vec![4.0, 2.0, 1.0], vec![0.0; 3]);
    normalize_peak(&mut buffer);

    assert!((buffer.left()[1] / buffer.left()[0] - 0.5).abs() < 1e-12);
    assert!((buffer.left()[2] / buffer.left()[0] - 0.25).abs() < 1e-12);
}
