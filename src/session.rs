//! Recording session: exclusive owner of the pitch sample buffer.
//!
//! A session collects accepted samples while recording is active and hands
//! the pipeline an immutable snapshot when recording stops. The buffer has
//! exactly one writer; analysis never overlaps recording.

use crate::config::IngestConfig;
use crate::pitch::{PitchReading, PitchSample, SampleFilter};
use crossbeam_channel::Receiver;

/// Manages the sample buffer for a single recording session.
///
/// Readings pass through the ingestion filter on `push`; only accepted
/// readings reach the buffer. `finish` consumes the session, so a completed
/// buffer can never be appended to again.
pub struct RecordingSession {
    filter: SampleFilter,
    samples: Vec<PitchSample>,
}

impl RecordingSession {
    /// Create an empty session with the given ingestion configuration.
    pub fn new(config: &IngestConfig) -> Self {
        Self {
            filter: SampleFilter::new(config),
            samples: Vec::new(),
        }
    }

    /// Drain a channel of readings into a new session.
    ///
    /// Consumes readings until the producer drops its sender, which is the
    /// recording-stop signal: once this returns, no further sample can
    /// arrive before the pipeline runs.
    pub fn collect(config: &IngestConfig, readings: Receiver<PitchReading>) -> Self {
        let mut session = Self::new(config);
        for reading in readings {
            session.push(reading);
        }
        session
    }

    /// Offer a reading to the session.
    ///
    /// Returns true if the reading passed the ingestion filter and was
    /// appended to the buffer.
    pub fn push(&mut self, reading: PitchReading) -> bool {
        if self.filter.accepts(&reading) {
            self.samples.push(reading.into_sample());
            true
        } else {
            false
        }
    }

    /// Number of accepted samples so far.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if no sample has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Accepted samples in arrival order.
    pub fn samples(&self) -> &[PitchSample] {
        &self.samples
    }

    /// Empty the buffer for a fresh recording.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// End the session, handing over the buffer snapshot for analysis.
    pub fn finish(self) -> Vec<PitchSample> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use std::thread;

    fn make_reading(pitch_hz: f32, timestamp_ms: u64) -> PitchReading {
        PitchReading::new(pitch_hz, 0.95, timestamp_ms)
    }

    #[test]
    fn test_session_starts_empty() {
        let session = RecordingSession::new(&IngestConfig::default());
        assert!(session.is_empty());
        assert_eq!(session.len(), 0);
    }

    #[test]
    fn test_push_accepts_and_rejects() {
        let mut session = RecordingSession::new(&IngestConfig::default());

        assert!(session.push(make_reading(150.0, 0)));
        assert!(!session.push(PitchReading::new(150.0, 0.2, 10)));
        assert!(!session.push(make_reading(500.0, 20)));

        assert_eq!(session.len(), 1);
        assert_eq!(session.samples()[0].pitch_hz, 150.0);
    }

    #[test]
    fn test_clear_restarts_session() {
        let mut session = RecordingSession::new(&IngestConfig::default());
        session.push(make_reading(150.0, 0));
        session.push(make_reading(152.0, 10));

        session.clear();
        assert!(session.is_empty());
    }

    #[test]
    fn test_finish_returns_accepted_samples_in_order() {
        let mut session = RecordingSession::new(&IngestConfig::default());
        session.push(make_reading(150.0, 0));
        session.push(make_reading(152.0, 10));

        let samples = session.finish();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].timestamp_ms, 0);
        assert_eq!(samples[1].timestamp_ms, 10);
    }

    #[test]
    fn test_collect_stops_at_disconnect() {
        let (tx, rx) = bounded(8);

        let producer = thread::spawn(move || {
            for i in 0..5u64 {
                tx.send(make_reading(140.0 + i as f32, i * 10)).unwrap();
            }
            // Sender dropped here: recording stop
        });

        let session = RecordingSession::collect(&IngestConfig::default(), rx);
        producer.join().unwrap();

        assert_eq!(session.len(), 5);
        assert_eq!(session.samples()[4].timestamp_ms, 40);
    }

    #[test]
    fn test_collect_applies_filter() {
        let (tx, rx) = bounded(8);
        tx.send(make_reading(150.0, 0)).unwrap();
        tx.send(PitchReading::new(150.0, 0.1, 10)).unwrap();
        tx.send(make_reading(151.0, 20)).unwrap();
        drop(tx);

        let session = RecordingSession::collect(&IngestConfig::default(), rx);
        assert_eq!(session.len(), 2);
    }
}
