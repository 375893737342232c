//! Tone classification: pitch contour → categorical tone.
//!
//! The four categories are modeled after tonal-language pitch shapes. The
//! whole-trace regression slope decides flat vs. directional; a dip check
//! on the trace's first and last thirds catches fall-then-rise contours
//! before the simple sign test would mislabel them.

use crate::config::ToneConfig;
use crate::pitch::slope;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Categorical pitch-contour shape of one syllable.
///
/// Serialized as its numeric code (1 to 4), which is what the playback
/// collaborator keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Level contour.
    Flat,
    /// Pitch climbs across the syllable.
    Rising,
    /// Pitch falls, then rises.
    Dipping,
    /// Pitch falls across the syllable.
    Falling,
}

impl Tone {
    /// Numeric code of this tone.
    pub fn code(self) -> u8 {
        match self {
            Tone::Flat => 1,
            Tone::Rising => 2,
            Tone::Dipping => 3,
            Tone::Falling => 4,
        }
    }

    /// Tone for a numeric code, if valid.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Tone::Flat),
            2 => Some(Tone::Rising),
            3 => Some(Tone::Dipping),
            4 => Some(Tone::Falling),
            _ => None,
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Tone::Flat => "flat",
            Tone::Rising => "rising",
            Tone::Dipping => "dipping",
            Tone::Falling => "falling",
        }
    }
}

impl Serialize for Tone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Tone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Tone::from_code(code)
            .ok_or_else(|| de::Error::custom(format!("invalid tone code {} (expected 1-4)", code)))
    }
}

/// Classify one syllable's pitch trace.
///
/// Rules in priority order: a near-zero whole-trace slope is Flat; a
/// fall-then-rise shape is Dipping; otherwise the slope sign picks Rising
/// or Falling. Degenerate traces (fewer than two samples) have slope 0 and
/// classify as Flat.
pub fn classify(pitches: &[f32], config: &ToneConfig) -> Tone {
    let overall = slope(pitches);

    if overall.abs() < config.flat_slope {
        return Tone::Flat;
    }
    if has_dip(pitches) {
        return Tone::Dipping;
    }
    if overall > 0.0 { Tone::Rising } else { Tone::Falling }
}

/// True if the trace falls over its opening third and rises over its
/// closing third.
///
/// Thirds are taken by truncating division; traces shorter than three
/// samples get empty thirds, both third-slopes default to 0, and the test
/// is false rather than an error.
fn has_dip(pitches: &[f32]) -> bool {
    let third = pitches.len() / 3;
    let opening = slope(&pitches[..third]);
    let closing = slope(&pitches[pitches.len() - third..]);
    opening < 0.0 && closing > 0.0
}
