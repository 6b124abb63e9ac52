//! wavmix CLI - Mix timed, volume-scaled audio clips into one stereo WAV
//!
//! This binary reads a clip manifest, mixes every clip at its start time and
//! gain, trims trailing silence, normalizes and writes the result.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use wavmix_cli::commands;
use wavmix_cli::config::{MixRequest, Overrides};
use wavmix_engine::settings::{validate_bit_depth, MAX_SAMPLE_RATE};
use wavmix_manifest::MANIFEST_FORMAT_HELP;

/// wavmix - Timed Audio Clip Mixer
#[derive(Parser)]
#[command(name = "wavmix")]
#[command(author, version, about, long_about = None)]
#[command(after_help = MANIFEST_FORMAT_HELP)]
struct Cli {
    /// Manifest file listing `<wavfile> <starttime> <volume>` triples
    manifest: PathBuf,

    /// Output WAV path (default: result.wav)
    #[arg(short, long)]
    output: Option<String>,

    /// Output sample rate in Hz (default: 44100)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_SAMPLE_RATE as i64))]
    sample_rate: Option<u32>,

    /// Output bits per sample: 8, 16, 24 or 32 (default: 16)
    #[arg(short, long, value_parser = parse_bit_depth)]
    bit_depth: Option<u16>,

    /// Clamp negative start times and volumes to 0 instead of failing
    #[arg(long)]
    lenient: bool,

    /// Samples at or below this magnitude count as silence when trimming
    #[arg(long)]
    trim_tolerance: Option<f64>,

    /// JSON settings file (flags take precedence over its values)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output machine-readable JSON (no colored output)
    #[arg(long)]
    json: bool,
}

fn parse_bit_depth(s: &str) -> Result<u16, String> {
    let bits: u16 = s.parse().map_err(|_| format!("not a number: {}", s))?;
    validate_bit_depth(bits).map_err(|e| e.to_string())?;
    Ok(bits)
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            output: self.output.clone(),
            sample_rate: self.sample_rate,
            bit_depth: self.bit_depth,
            trim_tolerance: self.trim_tolerance,
            lenient: self.lenient,
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let request = match MixRequest::resolve(&cli.manifest, cli.config.as_deref(), &cli.overrides()) {
        Ok(request) => request,
        Err(e) if cli.json => return commands::mix::report_config_error(&e),
        Err(e) => return Err(e),
    };
    log::debug!("resolved request: {:?}", request);
    commands::mix::run(&request, cli.json)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
