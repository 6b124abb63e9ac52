//! Tests for MixBuffer growth policies.

use super::buffer::sample_index;
use super::*;
use crate::error::EngineError;

#[test]
fn test_new_buffer_is_zeroed() {
    let buffer = MixBuffer::new(44100, 16);
    assert_eq!(buffer.len(), 16);
    assert_eq!(buffer.left().len(), buffer.right().len());
    assert!(buffer.left().iter().chain(buffer.right()).all(|&s| s == 0.0));
}

#[test]
fn test_start_hint_truncates() {
    let buffer = MixBuffer::from_start_hint(44100, 1.5).unwrap();
    assert_eq!(buffer.len(), 66150);

    let buffer = MixBuffer::from_start_hint(10, 0.99).unwrap();
    assert_eq!(buffer.len(), 9);

    let buffer = MixBuffer::from_start_hint(44100, 0.0).unwrap();
    assert!(buffer.is_empty());
}

#[test]
fn test_grow_to_is_exact() {
    let mut buffer = MixBuffer::new(8000, 10);
    buffer.grow_to(37).unwrap();
    assert_eq!(buffer.len(), 37);
    assert_eq!(buffer.right().len(), 37);
}

#[test]
fn test_grow_to_never_shrinks() {
    let mut buffer = MixBuffer::new(8000, 10);
    buffer.grow_to(4).unwrap();
    assert_eq!(buffer.len(), 10);
}

#[test]
fn test_grow_at_least_doubles() {
    let mut buffer = MixBuffer::new(8000, 10);
    buffer.grow_at_least(11).unwrap();
    assert_eq!(buffer.len(), 20);

    buffer.grow_at_least(81).unwrap();
    assert_eq!(buffer.len(), 160);
}

#[test]
fn test_grow_at_least_from_empty() {
    let mut buffer = MixBuffer::new(8000, 0);
    buffer.grow_at_least(5).unwrap();
    assert_eq!(buffer.len(), 8);
}

#[test]
fn test_growth_policies_differ() {
    let mut exact = MixBuffer::new(8000, 100);
    let mut doubling = exact.clone();
    exact.grow_to(150).unwrap();
    doubling.grow_at_least(150).unwrap();
    assert_eq!(exact.len(), 150);
    assert_eq!(doubling.len(), 200);
}

#[test]
fn test_growth_preserves_content() {
    let mut buffer = MixBuffer::new(8000, 4);
    buffer.add(1, 0.5, -0.5);
    buffer.add(3, 0.25, 0.75);

    buffer.grow_to(6).unwrap();
    buffer.grow_at_least(9).unwrap();

    assert_eq!(buffer.len(), 12);
    assert_eq!(&buffer.left()[..4], &[0.0, 0.5, 0.0, 0.25]);
    assert_eq!(&buffer.right()[..4], &[0.0, -0.5, 0.0, 0.75]);
    assert!(buffer.left()[4..].iter().all(|&s| s == 0.0));
    assert!(buffer.right()[4..].iter().all(|&s| s == 0.0));
}

#[test]
fn test_from_channels_pads_shorter_channel() {
    let buffer = MixBuffer::from_channels(8000, vec![1.0, 1.0, 1.0], vec![0.5]);
    assert_eq!(buffer.len(), 3);
    assert_eq!(buffer.right(), &[0.5, 0.0, 0.0]);
}

#[test]
fn test_duration_seconds() {
    let buffer = MixBuffer::new(44100, 88200);
    assert!((buffer.duration_seconds() - 2.0).abs() < 1e-12);
}

#[test]
fn test_peak_uses_both_channels() {
    let buffer = MixBuffer::from_channels(8000, vec![0.5, -0.7], vec![0.2, -1.25]);
    assert_eq!(buffer.peak(), 1.25);
}

#[test]
fn test_start_hint_past_limit_is_rejected() {
    let err = MixBuffer::from_start_hint(44100, 1e15).unwrap_err();
    assert!(matches!(err, EngineError::BufferTooLarge { limit: MAX_MIX_SAMPLES, .. }));

    let err = MixBuffer::from_start_hint(44100, f64::MAX).unwrap_err();
    assert!(matches!(err, EngineError::BufferTooLarge { .. }));
}

#[test]
fn test_grow_past_limit_leaves_buffer_unchanged() {
    let mut buffer = MixBuffer::new(8000, 4);
    buffer.add(2, 0.5, 0.5);

    assert!(buffer.grow_to(MAX_MIX_SAMPLES + 1).is_err());
    assert!(buffer.grow_at_least(usize::MAX).is_err());

    assert_eq!(buffer.len(), 4);
    assert_eq!(buffer.left()[2], 0.5);
}

#[test]
fn test_sample_index_conversion() {
    assert_eq!(sample_index(0.0).unwrap(), 0);
    assert_eq!(sample_index(44100.0).unwrap(), 44100);
    assert_eq!(sample_index(MAX_MIX_SAMPLES as f64).unwrap(), MAX_MIX_SAMPLES);
    assert!(sample_index(MAX_MIX_SAMPLES as f64 + 1.0).is_err());
    assert!(sample_index(f64::NAN).is_err());
    assert!(sample_index(f64::INFINITY).is_err());
}
