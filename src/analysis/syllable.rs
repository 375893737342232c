//! Syllable assembly: merged boundaries → the final output sequence.

use crate::analysis::boundary::Boundary;
use crate::analysis::tone::{Tone, classify};
use crate::config::ToneConfig;
use serde::{Deserialize, Serialize};

/// One detected unit of speech: a duration and a pitch-contour tone.
///
/// The ordered syllable sequence is the pipeline's terminal output, handed
/// to a scheduling/playback collaborator keyed by `(duration, tone)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    /// Elapsed time between the boundary's first and last sample.
    pub duration_ms: u64,
    /// Classified contour shape.
    pub tone: Tone,
}

/// Build the syllable sequence from merged boundaries.
///
/// A correct merger never emits an empty boundary, but stray placeholders
/// are filtered here anyway rather than producing zero-length artifacts.
pub fn assemble(boundaries: &[Boundary], config: &ToneConfig) -> Vec<Syllable> {
    boundaries
        .iter()
        .filter(|boundary| !boundary.is_empty())
        .map(|boundary| Syllable {
            duration_ms: boundary.duration_ms(),
            tone: classify(&boundary.pitches(), config),
        })
        .collect()
}
