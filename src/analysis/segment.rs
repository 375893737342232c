//! Segmentation: raw sample buffer → candidate syllable boundaries.
//!
//! Two cues end a syllable: a silence gap (pitch below the silence
//! threshold) and an abrupt pitch jump between consecutive voiced samples.
//! Silence gaps leave an empty placeholder boundary behind so that the
//! voiced runs on either side never share a boundary.

use crate::analysis::boundary::Boundary;
use crate::config::SegmentConfig;
use crate::pitch::PitchSample;

/// Partition `samples` into candidate syllable boundaries.
///
/// The output may contain empty placeholder boundaries (silence gaps);
/// the merger skips them. Within any returned non-empty boundary, no two
/// consecutive samples differ in pitch by the jump threshold or more.
pub fn segment(samples: &[PitchSample], config: &SegmentConfig) -> Vec<Boundary> {
    let mut boundaries: Vec<Boundary> = Vec::new();

    for &sample in samples {
        if sample.pitch_hz < config.silence_pitch_hz {
            // One placeholder per run of silence
            if boundaries.last().is_none_or(|last| !last.is_empty()) {
                boundaries.push(Boundary::new());
            }
            continue;
        }

        let jump = boundaries
            .last()
            .and_then(Boundary::last)
            .is_some_and(|prev| (sample.pitch_hz - prev.pitch_hz).abs() >= config.jump_pitch_hz);

        if boundaries.is_empty() || jump {
            boundaries.push(Boundary::new());
        }
        if let Some(last) = boundaries.last_mut() {
            last.push(sample);
        }
    }

    boundaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_samples(points: &[(f32, u64)]) -> Vec<PitchSample> {
        points
            .iter()
            .map(|&(pitch_hz, timestamp_ms)| PitchSample::new(pitch_hz, timestamp_ms))
            .collect()
    }

    fn voiced_lengths(boundaries: &[Boundary]) -> Vec<usize> {
        boundaries
            .iter()
            .filter(|b| !b.is_empty())
            .map(Boundary::len)
            .collect()
    }

    #[test]
    fn test_segment_empty_input() {
        let boundaries = segment(&[], &SegmentConfig::default());
        assert!(boundaries.is_empty());
    }

    #[test]
    fn test_segment_single_voiced_run() {
        let samples = make_samples(&[(150.0, 0), (152.0, 10), (151.0, 20)]);
        let boundaries = segment(&samples, &SegmentConfig::default());

        assert_eq!(boundaries.len(), 1);
        assert_eq!(boundaries[0].len(), 3);
    }

    #[test]
    fn test_segment_silence_splits_runs() {
        let samples = make_samples(&[
            (30.0, 0),
            (150.0, 10),
            (152.0, 20),
            (30.0, 30),
            (140.0, 40),
            (142.0, 50),
        ]);
        let boundaries = segment(&samples, &SegmentConfig::default());

        let voiced: Vec<&Boundary> = boundaries.iter().filter(|b| !b.is_empty()).collect();
        assert_eq!(voiced.len(), 2);
        assert_eq!(voiced[0].pitches(), vec![150.0, 152.0]);
        assert_eq!(voiced[1].pitches(), vec![140.0, 142.0]);
    }

    #[test]
    fn test_segment_collapses_consecutive_silence() {
        let samples = make_samples(&[(150.0, 0), (10.0, 10), (12.0, 20), (8.0, 30), (150.0, 40)]);
        let boundaries = segment(&samples, &SegmentConfig::default());

        // voiced, one placeholder for the whole gap, voiced (filled)
        assert_eq!(boundaries.len(), 2);
        assert_eq!(voiced_lengths(&boundaries), vec![1, 1]);
    }

    #[test]
    fn test_segment_pitch_jump_splits_without_silence() {
        let samples = make_samples(&[(150.0, 0), (152.0, 10), (170.0, 20), (171.0, 30)]);
        let boundaries = segment(&samples, &SegmentConfig::default());

        assert_eq!(voiced_lengths(&boundaries), vec![2, 2]);
    }

    #[test]
    fn test_segment_jump_threshold_is_inclusive() {
        // Exactly 7 Hz apart: breaks
        let samples = make_samples(&[(150.0, 0), (157.0, 10)]);
        let boundaries = segment(&samples, &SegmentConfig::default());
        assert_eq!(voiced_lengths(&boundaries), vec![1, 1]);

        // Just under: stays together
        let samples = make_samples(&[(150.0, 0), (156.9, 10)]);
        let boundaries = segment(&samples, &SegmentConfig::default());
        assert_eq!(voiced_lengths(&boundaries), vec![2]);
    }

    #[test]
    fn test_segment_leading_silence_placeholder_gets_filled() {
        let samples = make_samples(&[(10.0, 0), (150.0, 10)]);
        let boundaries = segment(&samples, &SegmentConfig::default());

        // The placeholder opened by the leading silence absorbs the first
        // voiced sample; nothing empty remains.
        assert_eq!(boundaries.len(), 1);
        assert_eq!(boundaries[0].pitches(), vec![150.0]);
    }

    #[test]
    fn test_segment_trailing_silence_leaves_placeholder() {
        let samples = make_samples(&[(150.0, 0), (10.0, 10)]);
        let boundaries = segment(&samples, &SegmentConfig::default());

        assert_eq!(boundaries.len(), 2);
        assert!(boundaries[1].is_empty());
    }

    #[test]
    fn test_segment_consecutive_samples_respect_jump_invariant() {
        let samples = make_samples(&[
            (150.0, 0),
            (153.0, 10),
            (162.0, 20),
            (163.0, 30),
            (150.0, 40),
        ]);
        let config = SegmentConfig::default();
        let boundaries = segment(&samples, &config);

        for boundary in boundaries.iter().filter(|b| !b.is_empty()) {
            for pair in boundary.samples().windows(2) {
                assert!(
                    (pair[1].pitch_hz - pair[0].pitch_hz).abs() < config.jump_pitch_hz,
                    "jump inside a boundary: {} -> {}",
                    pair[0].pitch_hz,
                    pair[1].pitch_hz
                );
            }
        }
    }
}
