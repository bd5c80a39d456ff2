//! Criterion benchmarks for per-triangle evaluation and aggregation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use plotarea::area::{evaluate, summarize, Method, TriangleSpec};
use plotarea::units::Unit;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_specs(m: usize, seed: u64) -> Vec<TriangleSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m as u64)
        .map(|id| {
            let method = Method::ALL[rng.gen_range(0..Method::ALL.len())];
            let mut spec = TriangleSpec::new(id, method);
            for field in method.fields() {
                let v: f64 = if field.starts_with("angle") {
                    rng.gen_range(10.0..80.0)
                } else {
                    rng.gen_range(5.0..50.0)
                };
                spec.set_input(field, Some(format!("{v:.3}"))).unwrap();
            }
            spec
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let specs = random_specs(5, 44);
    for s in &specs {
        group.bench_function(BenchmarkId::new("single", s.method().name()), |b| {
            b.iter(|| evaluate(black_box(s), Unit::Feet, 0))
        });
    }
    for &m in &[10usize, 100, 1000] {
        let specs = random_specs(m, 45);
        group.bench_with_input(BenchmarkId::new("summarize", m), &specs, |b, specs| {
            b.iter(|| summarize(black_box(specs), Unit::Meters))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
