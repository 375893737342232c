use criterion::{Criterion, black_box, criterion_group, criterion_main};
use syltone::{Config, PitchSample, extract_syllables};

/// Synthesize a recording: alternating voiced runs and silence gaps, with
/// slow pitch drift inside each run so merging and classification both do
/// real work.
fn make_recording(syllable_count: usize) -> Vec<PitchSample> {
    let mut samples = Vec::new();
    let mut t = 0u64;

    for s in 0..syllable_count {
        let base = 120.0 + (s % 5) as f32 * 30.0;
        let drift = if s % 2 == 0 { 2.0 } else { -2.0 };

        for i in 0..12u64 {
            samples.push(PitchSample::new(base + drift * i as f32, t));
            t += 10;
        }

        samples.push(PitchSample::new(5.0, t));
        t += 80;
    }

    samples
}

fn bench_extraction(c: &mut Criterion) {
    let config = Config::default();
    let short = make_recording(8);
    let long = make_recording(200);

    c.bench_function("extract_short_utterance", |b| {
        b.iter(|| extract_syllables(black_box(&short), &config))
    });

    c.bench_function("extract_long_recording", |b| {
        b.iter(|| extract_syllables(black_box(&long), &config))
    });
}

criterion_group!(benches, bench_extraction);
criterion_main!(benches);
