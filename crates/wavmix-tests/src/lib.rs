//! wavmix End-to-End Test Infrastructure
//!
//! Integration tests for manifest -> mix -> WAV flows:
//!
//! - `e2e_mix`: library-level runs through real WAV files on disk
//! - `e2e_cli`: the `wavmix` binary, its exit codes and JSON output
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wavmix-tests
//! ```

pub mod fixtures;
pub mod harness;

pub use fixtures::{read_back, MixFixture, ReadBack};
pub use harness::{CliResult, TestHarness};
