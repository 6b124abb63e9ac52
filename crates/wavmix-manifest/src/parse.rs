//! Manifest tokenizer and parser.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clip::Clip;
use crate::error::{ManifestError, ManifestResult};

/// One-line description of the manifest format, suitable for `--help` output.
pub const MANIFEST_FORMAT_HELP: &str =
    "Input file must contain groups of 3: <wavfile> <starttime> <volume>";

/// How negative start times and gains are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Negative values are a fatal error.
    #[default]
    Strict,
    /// Negative values are clamped to 0.0 with a warning.
    Lenient,
}

/// A whitespace separated token and the line it came from.
#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    line: usize,
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.lines()
        .enumerate()
        .flat_map(|(idx, line)| {
            line.split_whitespace()
                .map(move |text| Token { text, line: idx + 1 })
        })
        .collect()
}

fn parse_number(token: Token<'_>) -> ManifestResult<f64> {
    match token.text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ManifestError::InvalidNumber {
            token: token.text.to_string(),
            line: token.line,
        }),
    }
}

/// Parses manifest text into clips, in manifest order.
///
/// The token count is checked before any field is parsed, so a structurally
/// malformed manifest fails without looking at its contents.
pub fn parse_manifest(text: &str, strictness: Strictness) -> ManifestResult<Vec<Clip>> {
    let tokens = tokenize(text);

    if tokens.len() % 3 != 0 {
        return Err(ManifestError::MalformedStructure {
            token_count: tokens.len(),
        });
    }

    let mut clips = Vec::with_capacity(tokens.len() / 3);
    for triple in tokens.chunks_exact(3) {
        let (path, start, gain) = (triple[0], triple[1], triple[2]);

        let mut start_time = parse_number(start)?;
        let mut volume = parse_number(gain)?;

        if start_time < 0.0 {
            match strictness {
                Strictness::Strict => {
                    return Err(ManifestError::NegativeStartTime {
                        value: start_time,
                        line: start.line,
                    })
                }
                Strictness::Lenient => {
                    log::warn!(
                        "line {}: negative start time {} for '{}' clamped to 0",
                        start.line,
                        start_time,
                        path.text
                    );
                    start_time = 0.0;
                }
            }
        }

        if volume < 0.0 {
            match strictness {
                Strictness::Strict => {
                    return Err(ManifestError::NegativeGain {
                        value: volume,
                        line: gain.line,
                    })
                }
                Strictness::Lenient => {
                    log::warn!(
                        "line {}: negative volume {} for '{}' clamped to 0",
                        gain.line,
                        volume,
                        path.text
                    );
                    volume = 0.0;
                }
            }
        }

        log::debug!(
            "clip: {}, start: {}s, volume: {}",
            path.text,
            start_time,
            volume
        );
        clips.push(Clip::new(path.text, start_time, volume));
    }

    Ok(clips)
}

/// Reads and parses a manifest file.
pub fn load_manifest(path: &Path, strictness: Strictness) -> ManifestResult<Vec<Clip>> {
    let text = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_manifest(&text, strictness)
}
