//! Criterion benchmarks for the propagation engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use macro_core::CalibrationParameters;
use macro_model::{simulate, ShockSpecification, ShockType};

fn bench_simulate(c: &mut Criterion) {
    let params = CalibrationParameters::default();

    c.bench_function("simulate_monetary_60q", |b| {
        let spec = ShockSpecification::new(ShockType::MonetaryPolicy, 0.05, 60).unwrap();
        b.iter(|| simulate(black_box(&spec), black_box(&params)).unwrap())
    });

    c.bench_function("simulate_all_shocks_40q", |b| {
        let specs: Vec<_> = ShockType::ALL
            .iter()
            .map(|s| ShockSpecification::new(*s, 0.01, 40).unwrap())
            .collect();
        b.iter(|| {
            for spec in &specs {
                simulate(black_box(spec), black_box(&params)).unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_simulate);
criterion_main!(benches);
