//! Performance benchmarks for frequency decomposition

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use naff::signal::basis;
use naff::spectral::SpectralPeakEstimator;
use naff::{decompose_signal, Complex64, NaffConfig};

fn synthetic_signal(n: usize) -> Vec<Complex64> {
    let tones = [
        (Complex64::new(1.8, 0.0), 0.753262),
        (Complex64::new(0.3, 0.3), 0.423594),
        (Complex64::new(0.0123, 0.1545), 0.173),
    ];
    let mut signal = vec![Complex64::new(0.0, 0.0); n];
    for (amplitude, frequency) in tones {
        for (s, e) in signal.iter_mut().zip(basis(frequency, n)) {
            *s += amplitude * e;
        }
    }
    signal
}

fn bench_decompose(c: &mut Criterion) {
    let config = NaffConfig::default();
    let mut group = c.benchmark_group("decompose_3_components");

    for n in [256usize, 1024, 4096] {
        let signal = synthetic_signal(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &signal, |b, signal| {
            b.iter(|| {
                let _ = decompose_signal(black_box(signal), black_box(3), black_box(&config));
            });
        });
    }

    group.finish();
}

fn bench_peak_estimate(c: &mut Criterion) {
    let n = 4096;
    let signal = synthetic_signal(n);
    let estimator = SpectralPeakEstimator::new(n, 8.0).expect("valid length");

    c.bench_function("peak_estimate_4096", |b| {
        b.iter(|| {
            let _ = estimator.estimate(black_box(&signal), None);
        });
    });
}

criterion_group!(benches, bench_decompose, bench_peak_estimate);
criterion_main!(benches);
