//! Duration quantization: snap syllables to a tempo grid.
//!
//! A BPM-locked playback collaborator wants durations on a beat grid
//! rather than raw milliseconds. Quantization is opt-in and leaves tones
//! untouched.

use crate::analysis::syllable::Syllable;
use crate::defaults;
use crate::error::{Result, SyltoneError};

/// Tempo grid for duration quantization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantizeConfig {
    /// Tempo in beats per minute.
    pub bpm: f32,
    /// Grid slots per beat (4 = sixteenth notes).
    pub subdivision: u32,
}

impl Default for QuantizeConfig {
    fn default() -> Self {
        Self {
            bpm: defaults::QUANTIZE_BPM,
            subdivision: defaults::QUANTIZE_SUBDIVISION,
        }
    }
}

impl QuantizeConfig {
    /// Grid step in milliseconds.
    pub fn step_ms(&self) -> f32 {
        60_000.0 / self.bpm / self.subdivision as f32
    }

    fn validate(&self) -> Result<()> {
        if !self.bpm.is_finite() || self.bpm <= 0.0 {
            return Err(SyltoneError::ConfigInvalidValue {
                key: "quantize.bpm".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.subdivision == 0 {
            return Err(SyltoneError::ConfigInvalidValue {
                key: "quantize.subdivision".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Snap every syllable duration to the nearest grid step.
///
/// Durations never collapse to zero: anything shorter than half a step
/// still rounds up to one full step, so the playback collaborator always
/// receives an audible length.
pub fn quantize(syllables: &[Syllable], config: &QuantizeConfig) -> Result<Vec<Syllable>> {
    config.validate()?;
    let step_ms = config.step_ms();

    Ok(syllables
        .iter()
        .map(|syllable| {
            let steps = (syllable.duration_ms as f32 / step_ms).round().max(1.0);
            Syllable {
                duration_ms: (steps * step_ms).round() as u64,
                tone: syllable.tone,
            }
        })
        .collect())
}
