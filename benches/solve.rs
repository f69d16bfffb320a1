//! Benchmark end-to-end solve performance on generated fields.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slalom_nav::{scenario, solve, ScenarioConfig};

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for &circles in &[10usize, 50, 200] {
        let config = ScenarioConfig {
            circles,
            ..Default::default()
        };
        let s = scenario::generate(&config, 42).expect("scenario generation");

        group.bench_with_input(BenchmarkId::from_parameter(circles), &s, |b, s| {
            b.iter(|| solve(black_box(&s.field), s.start, s.goal).expect("path"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
