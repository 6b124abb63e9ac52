//! Run configuration: JSON settings file plus command-line overrides.
//!
//! Precedence is flag > settings file > built-in default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use wavmix_engine::MixSettings;
use wavmix_manifest::Strictness;

/// Default output path.
pub const DEFAULT_OUTPUT: &str = "result.wav";

/// Settings file contents.
///
/// Every key is optional:
///
/// ```json
/// { "sample_rate": 48000, "bit_depth": 24, "trim_tolerance": 1e-6, "strictness": "lenient" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixConfig {
    /// Engine settings.
    #[serde(flatten)]
    pub settings: MixSettings,
    /// Manifest strictness.
    pub strictness: Strictness,
    /// Output path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl MixConfig {
    /// Loads a settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(rate) = overrides.sample_rate {
            self.settings.sample_rate = rate;
        }
        if let Some(bits) = overrides.bit_depth {
            self.settings.bit_depth = bits;
        }
        if let Some(tolerance) = overrides.trim_tolerance {
            self.settings.trim_tolerance = tolerance;
        }
        if overrides.lenient {
            self.strictness = Strictness::Lenient;
        }
        if let Some(output) = &overrides.output {
            self.output = Some(output.clone());
        }
        self
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub output: Option<String>,
    pub sample_rate: Option<u32>,
    pub bit_depth: Option<u16>,
    pub trim_tolerance: Option<f64>,
    pub lenient: bool,
}

/// A fully resolved mixing request.
#[derive(Debug, Clone, PartialEq)]
pub struct MixRequest {
    /// Manifest to read.
    pub manifest: PathBuf,
    /// Output WAV path.
    pub output: PathBuf,
    /// Engine settings.
    pub settings: MixSettings,
    /// Manifest strictness.
    pub strictness: Strictness,
}

impl MixRequest {
    /// Builds a request with default settings.
    pub fn new(manifest: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            output: output.into(),
            settings: MixSettings::default(),
            strictness: Strictness::default(),
        }
    }

    /// Resolves a request from an optional settings file and overrides.
    pub fn resolve(
        manifest: impl Into<PathBuf>,
        config_path: Option<&Path>,
        overrides: &Overrides,
    ) -> Result<Self> {
        let config = match config_path {
            Some(path) => MixConfig::load(path)?,
            None => MixConfig::default(),
        }
        .with_overrides(overrides);

        Ok(Self {
            manifest: manifest.into(),
            output: PathBuf::from(config.output.as_deref().unwrap_or(DEFAULT_OUTPUT)),
            settings: config.settings,
            strictness: config.strictness,
        })
    }
}
