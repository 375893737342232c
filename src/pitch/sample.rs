//! Pitch sample types and the ingestion filter.
//!
//! The external detector reports a `(pitch, clarity)` pair per analysis
//! frame. Readings are timestamped at arrival; the filter decides which of
//! them become samples in the session buffer.

use crate::config::IngestConfig;
use serde::{Deserialize, Serialize};

/// One raw result from the external pitch detector, timestamped at arrival.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchReading {
    /// Estimated fundamental frequency in Hz.
    pub pitch_hz: f32,
    /// Detector confidence that the frame is periodic/voiced (0.0 to 1.0).
    pub clarity: f32,
    /// Monotonic arrival time in milliseconds.
    pub timestamp_ms: u64,
}

impl PitchReading {
    /// Creates a new reading.
    pub fn new(pitch_hz: f32, clarity: f32, timestamp_ms: u64) -> Self {
        Self {
            pitch_hz,
            clarity,
            timestamp_ms,
        }
    }

    /// Drops the clarity, keeping the accepted pitch estimate.
    pub fn into_sample(self) -> PitchSample {
        PitchSample {
            pitch_hz: self.pitch_hz,
            timestamp_ms: self.timestamp_ms,
        }
    }
}

/// One accepted pitch estimate. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchSample {
    /// Estimated fundamental frequency in Hz.
    pub pitch_hz: f32,
    /// Monotonic arrival time in milliseconds.
    pub timestamp_ms: u64,
}

impl PitchSample {
    /// Creates a new sample.
    pub fn new(pitch_hz: f32, timestamp_ms: u64) -> Self {
        Self {
            pitch_hz,
            timestamp_ms,
        }
    }
}

/// Acceptance rule applied in front of the sample buffer.
///
/// A reading passes iff its clarity exceeds the configured minimum and its
/// pitch lies strictly inside the plausible vocal range. Both comparisons
/// are strict: a reading exactly at a threshold is rejected.
#[derive(Debug, Clone, Copy)]
pub struct SampleFilter {
    min_clarity: f32,
    min_pitch_hz: f32,
    max_pitch_hz: f32,
}

impl SampleFilter {
    /// Builds a filter from the ingestion configuration.
    pub fn new(config: &IngestConfig) -> Self {
        Self {
            min_clarity: config.min_clarity,
            min_pitch_hz: config.min_pitch_hz,
            max_pitch_hz: config.max_pitch_hz,
        }
    }

    /// Returns true if the reading should reach the sample buffer.
    pub fn accepts(&self, reading: &PitchReading) -> bool {
        reading.clarity > self.min_clarity
            && reading.pitch_hz > self.min_pitch_hz
            && reading.pitch_hz < self.max_pitch_hz
    }
}
