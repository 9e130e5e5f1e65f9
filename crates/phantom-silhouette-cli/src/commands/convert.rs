//! Convert command implementation.
//!
//! Runs the full anonymization path: WAV decode, WORLD analysis, the
//! Phantom Silhouette transform, WORLD resynthesis, WAV encode. The
//! resynthesized signal is truncated to the input length before encoding.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use phantom_silhouette_core::{wav, ExcitationMode, FilterMemory, PhantomSilhouette, Vocoder};

use crate::world::WorldVocoder;

/// Runs the convert command.
///
/// # Arguments
/// * `input_path` - Path to the input WAV file
/// * `output_path` - Path to the output WAV file
/// * `mode` - Optional mode literal; `pink` selects pink noise, anything
///   else (or nothing) selects uniform noise
/// * `seed` - Seed for the excitation noise stream
/// * `fresh_state` - Clear pink filter registers at the start of every call
///
/// # Returns
/// Exit code 0 on success.
pub fn run(
    input_path: &str,
    output_path: &str,
    mode: Option<&str>,
    seed: u32,
    fresh_state: bool,
) -> Result<ExitCode> {
    let mode = if mode == Some("pink") {
        ExcitationMode::Pink
    } else {
        ExcitationMode::Uniform
    };
    let memory = if fresh_state {
        FilterMemory::Fresh
    } else {
        FilterMemory::Carried
    };

    let (samples, format) = wav::read_wav_file(input_path)
        .with_context(|| format!("failed to read {}", input_path))?;
    let sample_rate = format.sample_rate;

    eprintln!(
        "{} {} ({} Hz, {} samples, {:?} excitation)",
        "Anonymizing:".cyan().bold(),
        input_path,
        sample_rate,
        samples.len(),
        mode
    );

    let vocoder = WorldVocoder::new();
    let (f0_raw, time_axis) = vocoder.analyze(&samples, sample_rate);
    let f0 = vocoder.refine(&samples, &f0_raw, &time_axis, sample_rate);
    let envelope = vocoder.spectral_envelope(&samples, &f0, &time_axis, sample_rate);
    let aperiodicity = vocoder.aperiodicity(&samples, &f0, &time_axis, sample_rate);

    let mut engine = PhantomSilhouette::new(mode, seed).with_filter_memory(memory);
    let (excitation, reshaped) = engine.transform(&f0, &envelope, sample_rate)?;

    let mut rendered = vocoder.resynthesize(&excitation, &reshaped, &aperiodicity, sample_rate);
    rendered.truncate(samples.len());

    wav::write_wav_file(output_path, &rendered, sample_rate)
        .with_context(|| format!("failed to write {}", output_path))?;

    eprintln!("{} {}", "Wrote:".green().bold(), output_path);
    Ok(ExitCode::SUCCESS)
}
