//! Mix command implementation
//!
//! Reads a manifest, mixes its clips and writes one stereo WAV.

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wavmix_engine::{
    mix_clips, AudioDecoder, AudioEncoder, ClipReport, ClipStatus, EngineError, MixReport,
    WavCodec,
};
use wavmix_manifest::{load_manifest, ManifestError};

use super::json_output::{error_codes, JsonError, MixOutput, MixResult};
use crate::config::MixRequest;

/// A fatal failure of a mixing run.
#[derive(Debug, thiserror::Error)]
pub enum MixFailure {
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl MixFailure {
    /// Stable error code of the underlying error.
    pub fn code(&self) -> &'static str {
        match self {
            MixFailure::Manifest(e) => e.code(),
            MixFailure::Engine(e) => e.code(),
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct MixSummary {
    /// Output WAV path.
    pub output: PathBuf,
    /// Bits per sample of the output.
    pub bit_depth: u16,
    /// Size of the written file in bytes.
    pub file_size: usize,
    /// BLAKE3 hash of the PCM data chunk.
    pub pcm_hash: String,
    /// Mix report.
    pub report: MixReport,
}

/// Runs the whole pipeline with the WAV codec.
///
/// The output file is only written once the mix has succeeded.
pub fn execute(request: &MixRequest) -> Result<MixSummary, MixFailure> {
    execute_with(request, &WavCodec, &WavCodec)
}

/// Runs the whole pipeline with the given codec pair.
pub fn execute_with<D, E>(
    request: &MixRequest,
    decoder: &D,
    encoder: &E,
) -> Result<MixSummary, MixFailure>
where
    D: AudioDecoder + ?Sized,
    E: AudioEncoder + ?Sized,
{
    // Settings are checked before the manifest is even read
    request.settings.validate()?;

    let clips = load_manifest(&request.manifest, request.strictness)?;
    log::info!(
        "loaded {} clips from {}",
        clips.len(),
        request.manifest.display()
    );

    let outcome = mix_clips(&clips, decoder, &request.settings)?;
    let wav = encoder.encode(
        &request.output,
        &outcome.buffer,
        request.settings.bit_depth,
    )?;
    log::info!(
        "wrote {} ({} samples, {} bytes)",
        request.output.display(),
        wav.num_samples,
        wav.wav_data.len()
    );

    Ok(MixSummary {
        output: request.output.clone(),
        bit_depth: wav.bits_per_sample,
        file_size: wav.wav_data.len(),
        pcm_hash: wav.pcm_hash,
        report: outcome.report,
    })
}

/// Run the mix command
///
/// # Arguments
/// * `request` - Resolved mixing request
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(request: &MixRequest, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(request)
    } else {
        run_human(request)
    }
}

/// Run mix with human-readable (colored) output
fn run_human(request: &MixRequest) -> Result<ExitCode> {
    println!(
        "{} {}",
        "Mixing:".cyan().bold(),
        request.manifest.display()
    );

    let summary = execute(request)?;
    print_report(&summary.report);

    println!(
        "\n{} {}",
        "Wrote".green().bold(),
        summary.output.display()
    );
    println!(
        "  {} {} Hz, {}-bit stereo, {:.3} s",
        "Format:".dimmed(),
        summary.report.sample_rate,
        summary.bit_depth,
        summary.report.duration_seconds
    );
    println!("  {} {}", "PCM hash:".dimmed(), &summary.pcm_hash[..16]);

    Ok(ExitCode::SUCCESS)
}

/// One human-readable line for a clip: status, then source format details.
fn clip_line(clip: &ClipReport, output_rate: u32) -> String {
    let status = match clip.status {
        ClipStatus::Mixed => "mixed".green(),
        ClipStatus::Truncated => "truncated".yellow(),
        ClipStatus::Skipped => "skipped".red(),
    };
    let mut line = format!(
        "  [{}] {} @ {}s x{} {}",
        clip.index, clip.source, clip.start_time, clip.gain, status
    );

    if let (Some(rate), Some(channels)) = (clip.source_sample_rate, clip.source_channels) {
        let detail = if clip.resampled {
            format!("{} ch, resampled {} -> {} Hz", channels, rate, output_rate)
        } else {
            format!("{} ch, {} Hz", channels, rate)
        };
        line.push_str(&format!(" ({})", detail.dimmed()));
    }
    line
}

fn print_report(report: &MixReport) {
    for clip in &report.clips {
        println!("{}", clip_line(clip, report.sample_rate));
        if let Some(reason) = &clip.reason {
            println!("      {}", reason.dimmed());
        }
    }

    println!(
        "{} {} of {} clips",
        "Mixed".cyan(),
        report.mixed_count(),
        report.clips.len()
    );
    if report.trimmed_samples > 0 {
        println!(
            "{} {} trailing silent samples",
            "Trimmed".cyan(),
            report.trimmed_samples
        );
    }
    if let Some(gain) = report.normalize_gain {
        println!(
            "{} peak {:.4} -> gain {:.4}",
            "Normalized".cyan(),
            report.peak_before_normalize,
            gain
        );
    }
}

/// Run mix with machine-readable JSON output
fn run_json(request: &MixRequest) -> Result<ExitCode> {
    let (output, code) = match execute(request) {
        Ok(summary) => (
            MixOutput::success(MixResult {
                manifest: request.manifest.display().to_string(),
                output: summary.output.display().to_string(),
                bit_depth: summary.bit_depth,
                file_size: summary.file_size,
                pcm_hash: summary.pcm_hash,
                report: summary.report,
            }),
            ExitCode::SUCCESS,
        ),
        Err(failure) => (
            MixOutput::failure(vec![failure_to_json(&failure, &request.manifest)]),
            ExitCode::from(1),
        ),
    };

    let json = serde_json::to_string_pretty(&output).map_err(|e| {
        anyhow::anyhow!("{}: failed to serialize output: {}", error_codes::JSON_SERIALIZE, e)
    })?;
    println!("{}", json);
    Ok(code)
}

fn failure_to_json(failure: &MixFailure, manifest: &Path) -> JsonError {
    let error = JsonError::new(failure.code(), failure.to_string());
    match failure {
        MixFailure::Manifest(_) => error.with_file(manifest.display().to_string()),
        MixFailure::Engine(_) => error,
    }
}

/// Emits a JSON failure for an error raised before a request could be built.
pub fn report_config_error(err: &anyhow::Error) -> Result<ExitCode> {
    let output = MixOutput::failure(vec![JsonError::new(
        error_codes::CONFIG,
        format!("{:#}", err),
    )]);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::from(1))
}
