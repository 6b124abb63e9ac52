//! wavmix Mixing Engine
//!
//! This crate mixes timed, volume-scaled audio clips into one stereo track.
//!
//! # Overview
//!
//! For each clip of a manifest, in order, the engine:
//!
//! 1. Decodes the source through an [`AudioDecoder`]
//! 2. Resamples every channel to the output rate (linear interpolation)
//! 3. Accumulates the clip into a growable [`MixBuffer`] at its start offset,
//!    applying gain and routing mono to both channels
//!
//! It then trims trailing silence and, if the peak exceeds 1.0, scales the
//! whole buffer so the peak becomes exactly 1.0. A clip that fails to decode
//! is logged and skipped without aborting the mix.
//!
//! # Example
//!
//! ```
//! use wavmix_engine::{mix_clips, DecodedAudio, MemoryDecoder, MixSettings};
//! use wavmix_manifest::Clip;
//!
//! let decoder = MemoryDecoder::new().with("tone.wav", DecodedAudio::mono(8000, vec![0.5; 8000]));
//! let clips = vec![Clip::new("tone.wav", 0.0, 1.0), Clip::new("tone.wav", 0.5, 1.0)];
//!
//! let outcome = mix_clips(&clips, &decoder, &MixSettings::with_sample_rate(8000)).unwrap();
//! assert_eq!(outcome.buffer.len(), 12000);
//! ```
//!
//! # Crate Structure
//!
//! - [`mix_clips()`] - Main entry point for a mixing pass
//! - [`resample`] - Linear-interpolation sample rate conversion
//! - [`mixer`] - Mix buffer, clip accumulation, trim and normalization
//! - [`codec`] - Decode/encode traits and the WAV codec
//! - [`wav`] - WAV reading, deterministic writing, PCM hashing

pub mod audio;
pub mod codec;
pub mod error;
pub mod mixer;
pub mod pipeline;
pub mod report;
pub mod resample;
pub mod settings;
pub mod wav;

// Re-export main types at crate root
pub use audio::{ClipSamples, DecodedAudio};
pub use codec::{AudioDecoder, AudioEncoder, MemoryDecoder, WavCodec};
pub use error::{EngineError, EngineResult};
pub use mixer::{MixBuffer, Normalization};
pub use pipeline::{mix_clips, MixOutcome};
pub use report::{ClipReport, ClipStatus, MixReport};
pub use settings::MixSettings;
pub use wav::WavResult;
