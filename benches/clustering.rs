use catclump::cluster::{CategoricalClustering, GreedyCu};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

fn bench_greedy_cu(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_cu");

    // Generate synthetic categorical data
    let mut rng = StdRng::seed_from_u64(42);
    let n = 500;
    let m = 8;
    let k = 5;

    let data: Vec<Vec<u8>> = (0..n)
        .map(|_| (0..m).map(|_| rng.random_range(0..6u8)).collect())
        .collect();

    group.bench_function("fit_predict_n500_m8_k5", |b| {
        b.iter(|| {
            let model = GreedyCu::new(k).with_restarts(1);
            model.fit_predict(black_box(&data)).unwrap();
        })
    });

    group.bench_function("fit_predict_n500_m8_k5_trials50", |b| {
        b.iter(|| {
            let model = GreedyCu::new(k).with_restarts(1).with_seed_trials(50);
            model.fit_predict(black_box(&data)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_greedy_cu);
criterion_main!(benches);
