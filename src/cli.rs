//! Command-line interface for syltone
//!
//! Provides argument parsing using clap derive macros.

use crate::defaults;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tonal-rhythm extraction for live voice input
#[derive(Parser, Debug)]
#[command(name = "syltone", version, about = "Extract duration/tone syllables from pitch readings")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress the stderr summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (per-syllable breakdown on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze recorded pitch readings and print syllables as JSON
    Analyze {
        /// Input JSON file of pitch readings (stdin when omitted)
        input: Option<PathBuf>,

        /// Calibration preset (speech, loose)
        #[arg(long, value_name = "NAME")]
        preset: Option<String>,

        /// Snap syllable durations to a tempo grid at this BPM
        #[arg(long, value_name = "BPM")]
        bpm: Option<f32>,

        /// Grid slots per beat when --bpm is set
        #[arg(long, value_name = "N", default_value_t = defaults::QUANTIZE_SUBDIVISION)]
        subdivision: u32,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}
