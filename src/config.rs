//! Configuration for the extraction pipeline.
//!
//! Every threshold the pipeline consults is a named field here, backed by a
//! documented constant in [`crate::defaults`]. Two calibrations observed in
//! practice are exposed as [`Preset`]s rather than hard-coded.

use crate::defaults;
use crate::error::{Result, SyltoneError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub ingest: IngestConfig,
    pub segment: SegmentConfig,
    pub merge: MergeConfig,
    pub tone: ToneConfig,
}

/// Ingestion filter configuration (detector reading → sample buffer)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IngestConfig {
    /// Minimum detector clarity for a reading to be accepted (exclusive).
    pub min_clarity: f32,
    /// Lower edge of the plausible vocal range in Hz (exclusive).
    pub min_pitch_hz: f32,
    /// Upper edge of the plausible vocal range in Hz (exclusive).
    pub max_pitch_hz: f32,
}

/// Segmentation configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SegmentConfig {
    /// Pitches below this are treated as unvoiced silence.
    pub silence_pitch_hz: f32,
    /// Absolute pitch difference that forces a new boundary.
    pub jump_pitch_hz: f32,
}

/// Boundary merge configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MergeConfig {
    /// Maximum pitch delta between adjacent boundary edges to rejoin them.
    pub pitch_window_hz: f32,
    /// Maximum time gap between adjacent boundary edges to rejoin them.
    pub gap_ms: u64,
}

/// Tone classification configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToneConfig {
    /// Slope magnitude below which a trace is the level tone.
    pub flat_slope: f32,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            min_clarity: defaults::MIN_CLARITY,
            min_pitch_hz: defaults::MIN_PITCH_HZ,
            max_pitch_hz: defaults::MAX_PITCH_HZ,
        }
    }
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            silence_pitch_hz: defaults::SILENCE_PITCH_HZ,
            jump_pitch_hz: defaults::PITCH_JUMP_HZ,
        }
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            pitch_window_hz: defaults::MERGE_PITCH_HZ,
            gap_ms: defaults::MERGE_GAP_MS,
        }
    }
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            flat_slope: defaults::FLAT_SLOPE,
        }
    }
}

/// Named calibration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Primary calibration for spoken voice (the defaults).
    Speech,
    /// Loose calibration: wider pitch range, lower clarity bar, coarser
    /// merge and flatness windows.
    Loose,
}

impl FromStr for Preset {
    type Err = SyltoneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "speech" => Ok(Preset::Speech),
            "loose" | "wide" => Ok(Preset::Loose),
            other => Err(SyltoneError::ConfigInvalidValue {
                key: "preset".to_string(),
                message: format!("unknown preset \"{}\" (expected speech or loose)", other),
            }),
        }
    }
}

impl Config {
    /// Build the configuration for a named preset.
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Speech => Self::default(),
            Preset::Loose => Self {
                ingest: IngestConfig {
                    min_clarity: defaults::LOOSE_MIN_CLARITY,
                    min_pitch_hz: defaults::LOOSE_MIN_PITCH_HZ,
                    max_pitch_hz: defaults::LOOSE_MAX_PITCH_HZ,
                },
                segment: SegmentConfig::default(),
                merge: MergeConfig {
                    pitch_window_hz: defaults::LOOSE_MERGE_PITCH_HZ,
                    gap_ms: defaults::LOOSE_MERGE_GAP_MS,
                },
                tone: ToneConfig {
                    flat_slope: defaults::LOOSE_FLAT_SLOPE,
                },
            },
        }
    }

    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SyltoneError::ConfigFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                SyltoneError::Io(e)
            }
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Returns errors for invalid TOML.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(SyltoneError::ConfigFileNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - SYLTONE_PRESET → replaces the whole config with a named preset
    pub fn with_env_overrides(self) -> Self {
        if let Ok(name) = std::env::var("SYLTONE_PRESET")
            && let Ok(preset) = name.parse::<Preset>()
        {
            return Config::preset(preset);
        }
        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/syltone/config.toml on Linux
    #[cfg(feature = "cli")]
    pub fn default_path() -> std::path::PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("syltone")
            .join("config.toml")
    }

    /// Validate all thresholds, failing fast on values that would produce
    /// silently-wrong segmentation.
    pub fn validate(&self) -> Result<()> {
        ensure_finite_non_negative("ingest.min_clarity", self.ingest.min_clarity)?;
        if self.ingest.min_clarity > 1.0 {
            return Err(invalid("ingest.min_clarity", "must be at most 1.0"));
        }
        ensure_finite_non_negative("ingest.min_pitch_hz", self.ingest.min_pitch_hz)?;
        ensure_finite_non_negative("ingest.max_pitch_hz", self.ingest.max_pitch_hz)?;
        if self.ingest.min_pitch_hz >= self.ingest.max_pitch_hz {
            return Err(invalid(
                "ingest.max_pitch_hz",
                "must be greater than ingest.min_pitch_hz",
            ));
        }
        ensure_finite_non_negative("segment.silence_pitch_hz", self.segment.silence_pitch_hz)?;
        ensure_finite_non_negative("segment.jump_pitch_hz", self.segment.jump_pitch_hz)?;
        if self.segment.jump_pitch_hz == 0.0 {
            return Err(invalid("segment.jump_pitch_hz", "must be positive"));
        }
        ensure_finite_non_negative("merge.pitch_window_hz", self.merge.pitch_window_hz)?;
        ensure_finite_non_negative("tone.flat_slope", self.tone.flat_slope)?;
        if self.tone.flat_slope == 0.0 {
            return Err(invalid("tone.flat_slope", "must be positive"));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> SyltoneError {
    SyltoneError::ConfigInvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}

fn ensure_finite_non_negative(key: &str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(invalid(key, "must be finite"));
    }
    if value < 0.0 {
        return Err(invalid(key, "must not be negative"));
    }
    Ok(())
}
