//! Benchmark for the fit protocol (target resolution + scatter drawing).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_viz_features::features::determine_target_type;
use trueno_viz_features::prelude::*;

fn dataset(size: usize) -> Matrix {
    let data = (0..size).flat_map(|i| [i as f32, (i as f32).sin()]).collect();
    Matrix::new(data, size, 2).unwrap()
}

fn resolve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("determine_target_type");

    for size in [100, 1_000, 10_000] {
        let y = Target::from((0..size).map(|i| (i % 7) as i64).collect::<Vec<_>>());

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| determine_target_type(TargetType::Auto, Some(black_box(&y)), 10).unwrap());
        });
    }

    group.finish();
}

fn fit_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scatter_fit");

    for size in [100, 1_000, 10_000] {
        let x = dataset(size);
        let discrete = Target::from((0..size).map(|i| (i % 3) as i64).collect::<Vec<_>>());
        let continuous = Target::from((0..size).map(|i| i as f32).collect::<Vec<_>>());

        group.bench_with_input(BenchmarkId::new("discrete", size), &size, |b, _| {
            let mut viz = ScatterVisualizer::new(&VisualizerConfig::new()).unwrap();
            b.iter(|| {
                viz.fit(black_box(&x), Some(black_box(&discrete))).unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("continuous", size), &size, |b, _| {
            let mut viz = ScatterVisualizer::new(&VisualizerConfig::new()).unwrap();
            b.iter(|| {
                viz.fit(black_box(&x), Some(black_box(&continuous))).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, resolve_benchmark, fit_benchmark);
criterion_main!(benches);
