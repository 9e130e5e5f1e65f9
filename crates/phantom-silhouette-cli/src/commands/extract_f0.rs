//! Extract-f0 command implementation.
//!
//! Decodes a WAV file and prints the refined f0 contour as one line of
//! space-separated values with six decimal digits.

use anyhow::{Context, Result};
use std::process::ExitCode;

use phantom_silhouette_core::wav;

use crate::world::WorldVocoder;

/// Runs the extract-f0 command.
///
/// # Arguments
/// * `input_path` - Path to the input WAV file
///
/// # Returns
/// Exit code 0 on success.
pub fn run(input_path: &str) -> Result<ExitCode> {
    let (samples, format) = wav::read_wav_file(input_path)
        .with_context(|| format!("failed to read {}", input_path))?;

    let vocoder = WorldVocoder::new();
    let f0 = vocoder.extract_f0(&samples, format.sample_rate);

    let line: Vec<String> = f0.iter().map(|v| format!("{:.6}", v)).collect();
    println!("{}", line.join(" "));

    Ok(ExitCode::SUCCESS)
}
