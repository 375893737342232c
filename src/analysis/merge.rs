//! Boundary merging: rejoin splits the segmenter was too eager about.
//!
//! Segmentation errs toward splitting; a brief detector dropout or a
//! borderline jump can cut one spoken syllable in two. Merging compares
//! each boundary's opening sample against the closing sample of the last
//! accepted boundary and rejoins them when both the pitch delta and the
//! time gap are small.

use crate::analysis::boundary::Boundary;
use crate::config::MergeConfig;

/// Collapse acoustically-close adjacent boundaries.
///
/// Silence placeholders are dropped. Each surviving boundary is compared
/// against the most recently accepted boundary, which may itself already be
/// the product of earlier merges, so chains of close boundaries collapse
/// into one. Inputs with fewer than two boundaries pass through unchanged.
pub fn merge(boundaries: Vec<Boundary>, config: &MergeConfig) -> Vec<Boundary> {
    if boundaries.len() < 2 {
        return boundaries;
    }

    let mut merged: Vec<Boundary> = Vec::new();

    for boundary in boundaries {
        if boundary.is_empty() {
            continue;
        }

        let close = merged
            .last()
            .and_then(Boundary::last)
            .zip(boundary.first())
            .is_some_and(|(prev, next)| {
                (next.pitch_hz - prev.pitch_hz).abs() <= config.pitch_window_hz
                    && next.timestamp_ms.saturating_sub(prev.timestamp_ms) <= config.gap_ms
            });

        if close && let Some(last) = merged.last_mut() {
            last.absorb(boundary);
        } else {
            merged.push(boundary);
        }
    }

    merged
}
