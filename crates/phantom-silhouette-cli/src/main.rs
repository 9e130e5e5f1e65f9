//! Phantom Silhouette CLI - voice anonymization over WAV files.
//!
//! This binary provides commands for extracting f0 contours and for
//! rendering the Phantom Silhouette anonymization effect through the
//! external WORLD vocoder.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use phantom_silhouette_cli::commands;

/// Phantom Silhouette - parametric voice anonymization
#[derive(Parser)]
#[command(name = "phantom-silhouette")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the fundamental-frequency contour from a WAV file
    ExtractF0 {
        /// Path to the input WAV file
        input: String,
    },

    /// Anonymize a WAV file with the Phantom Silhouette effect
    Convert {
        /// Path to the input WAV file
        input: String,

        /// Path to the output WAV file
        output: String,

        /// Excitation selector: the literal `pink` switches to pink noise,
        /// anything else keeps uniform noise
        mode: Option<String>,

        /// Seed for the excitation noise stream
        #[arg(long, default_value = "0")]
        seed: u32,

        /// Clear the pink filter registers at the start of every utterance
        #[arg(long)]
        fresh_state: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::ExtractF0 { input } => commands::extract_f0::run(&input),
        Commands::Convert {
            input,
            output,
            mode,
            seed,
            fresh_state,
        } => commands::convert::run(&input, &output, mode.as_deref(), seed, fresh_state),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_extract_f0() {
        let cli = Cli::try_parse_from(["phantom-silhouette", "extract-f0", "input.wav"]).unwrap();
        match cli.command {
            Commands::ExtractF0 { input } => assert_eq!(input, "input.wav"),
            _ => panic!("expected extract-f0 command"),
        }
    }

    #[test]
    fn test_cli_parses_convert_defaults() {
        let cli = Cli::try_parse_from(["phantom-silhouette", "convert", "in.wav", "out.wav"])
            .unwrap();
        match cli.command {
            Commands::Convert {
                input,
                output,
                mode,
                seed,
                fresh_state,
            } => {
                assert_eq!(input, "in.wav");
                assert_eq!(output, "out.wav");
                assert!(mode.is_none());
                assert_eq!(seed, 0);
                assert!(!fresh_state);
            }
            _ => panic!("expected convert command"),
        }
    }

    #[test]
    fn test_cli_parses_convert_pink_with_seed() {
        let cli = Cli::try_parse_from([
            "phantom-silhouette",
            "convert",
            "in.wav",
            "out.wav",
            "pink",
            "--seed",
            "7",
            "--fresh-state",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert {
                mode,
                seed,
                fresh_state,
                ..
            } => {
                assert_eq!(mode.as_deref(), Some("pink"));
                assert_eq!(seed, 7);
                assert!(fresh_state);
            }
            _ => panic!("expected convert command"),
        }
    }

    #[test]
    fn test_cli_rejects_missing_positionals() {
        // Fewer than two positional arguments must fail before any
        // processing happens.
        assert!(Cli::try_parse_from(["phantom-silhouette", "convert", "in.wav"]).is_err());
        assert!(Cli::try_parse_from(["phantom-silhouette", "convert"]).is_err());
        assert!(Cli::try_parse_from(["phantom-silhouette", "extract-f0"]).is_err());
    }
}
