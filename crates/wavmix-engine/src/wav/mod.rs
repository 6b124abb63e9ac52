//! WAV codec.
//!
//! Decoding goes through `hound` and accepts integer or float PCM, mono or
//! stereo. Encoding writes stereo integer PCM with fixed headers and no
//! metadata chunks, so identical mixes produce identical files and the hash
//! of the PCM data can be used to compare runs.

mod format;
mod pcm;
mod reader;
mod result;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, hash_pcm};
pub use reader::{read_wav, read_wav_bytes};
pub use result::WavResult;
pub use writer::{stereo_to_pcm, write_wav, write_wav_to_vec};
