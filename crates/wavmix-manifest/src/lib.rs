//! wavmix Clip Manifest Library
//!
//! This crate provides the clip type and the manifest parser used by the
//! wavmix mixing engine. A manifest is a plain text file of whitespace
//! separated triples:
//!
//! ```text
//! <path> <start_time_seconds> <gain>
//! ```
//!
//! # Example
//!
//! ```
//! use wavmix_manifest::{parse_manifest, Strictness};
//!
//! let clips = parse_manifest("kick.wav 0.0 1.0\nsnare.wav 0.5 0.8", Strictness::Strict).unwrap();
//! assert_eq!(clips.len(), 2);
//! assert_eq!(clips[1].start_time, 0.5);
//! ```
//!
//! # Modules
//!
//! - [`clip`]: The immutable clip placement type
//! - [`error`]: Manifest error type and stable error codes
//! - [`parse`]: Tokenizer, parser, and strictness policy

pub mod clip;
pub mod error;
pub mod parse;

// Re-export commonly used types at the crate root
pub use clip::{max_start_time, Clip};
pub use error::{ManifestError, ManifestResult};
pub use parse::{load_manifest, parse_manifest, Strictness, MANIFEST_FORMAT_HELP};
