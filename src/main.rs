use anyhow::Context;
use clap::Parser;
use std::io::Read;
use std::path::Path;
use syltone::cli::{Cli, Commands};
use syltone::{
    Config, PitchReading, Preset, QuantizeConfig, RecordingSession, SyltoneError,
    extract_syllables, quantize,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::load_or_default(&Config::default_path())?,
    }
    .with_env_overrides();

    match cli.command {
        Commands::Analyze {
            input,
            preset,
            bpm,
            subdivision,
            pretty,
        } => {
            let config = match preset {
                Some(name) => Config::preset(name.parse::<Preset>()?),
                None => config,
            };

            let readings = read_readings(input.as_deref())?;
            let offered = readings.len();

            let mut session = RecordingSession::new(&config.ingest);
            for reading in readings {
                session.push(reading);
            }
            let accepted = session.len();
            let samples = session.finish();

            let mut syllables = extract_syllables(&samples, &config)?;
            if let Some(bpm) = bpm {
                syllables = quantize(&syllables, &QuantizeConfig { bpm, subdivision })?;
            }

            let json = if pretty {
                serde_json::to_string_pretty(&syllables)?
            } else {
                serde_json::to_string(&syllables)?
            };
            println!("{}", json);

            if !cli.quiet {
                eprintln!(
                    "{}/{} readings accepted, {} syllables",
                    accepted,
                    offered,
                    syllables.len()
                );
            }
            if cli.verbose {
                for (i, syllable) in syllables.iter().enumerate() {
                    eprintln!(
                        "  #{}: {} ms, tone {} ({})",
                        i,
                        syllable.duration_ms,
                        syllable.tone.code(),
                        syllable.tone.name()
                    );
                }
            }
        }
        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

/// Read a JSON array of pitch readings from a file, or stdin when no path
/// is given.
fn read_readings(path: Option<&Path>) -> syltone::Result<Vec<PitchReading>> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    serde_json::from_str(&text).map_err(|e| SyltoneError::InputParse {
        message: e.to_string(),
    })
}
