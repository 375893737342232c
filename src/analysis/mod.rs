//! The extraction pipeline: segmentation, merging, classification, assembly.
//!
//! Each stage takes an immutable input sequence and returns a new one; no
//! state crosses stage boundaries, so a run over the same samples always
//! produces the same syllables.

pub mod boundary;
pub mod merge;
pub mod quantize;
pub mod segment;
pub mod syllable;
pub mod tone;

pub use boundary::Boundary;
pub use merge::merge;
pub use quantize::{QuantizeConfig, quantize};
pub use segment::segment;
pub use syllable::{Syllable, assemble};
pub use tone::{Tone, classify};

use crate::config::Config;
use crate::error::Result;
use crate::pitch::PitchSample;

/// Run the full pipeline over one recording's sample snapshot.
///
/// Validates the configuration first, then segments, merges, and assembles.
/// An empty snapshot yields an empty syllable sequence, not an error.
pub fn extract_syllables(samples: &[PitchSample], config: &Config) -> Result<Vec<Syllable>> {
    config.validate()?;

    let boundaries = segment(samples, &config.segment);
    let merged = merge(boundaries, &config.merge);
    Ok(assemble(&merged, &config.tone))
}
