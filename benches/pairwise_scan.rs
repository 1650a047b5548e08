use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use findangular::{
    compute_separation_stats, partition::PartitionStrategy, separation::angular_distance, Catalog,
    Point, RunParams,
};

fn random_catalog(n: usize, rng: &mut StdRng) -> Catalog {
    (0..n as i64)
        .map(|id| {
            Point::new(
                id,
                rng.random_range(0.0..360.0),
                rng.random_range(-90.0..=90.0),
            )
        })
        .collect()
}

fn bench_angular_distance(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let cases: Vec<(f64, f64, f64, f64)> = (0..10_000)
        .map(|_| {
            (
                rng.random_range(0.0..360.0),
                rng.random_range(-90.0..=90.0),
                rng.random_range(0.0..360.0),
                rng.random_range(-90.0..=90.0),
            )
        })
        .collect();

    c.bench_function("angular_distance/10k", |b| {
        b.iter(|| {
            for &(ra1, dec1, ra2, dec2) in &cases {
                black_box(angular_distance(ra1, dec1, ra2, dec2));
            }
        })
    });
}

fn bench_full_scan(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let catalog = random_catalog(2_000, &mut rng);

    let mut group = c.benchmark_group("pairwise_scan/2000");
    group.sample_size(10);
    group.throughput(Throughput::Elements(catalog.pair_count()));

    for strategy in [PartitionStrategy::EvenRows, PartitionStrategy::BalancedPairs] {
        for workers in [1, 2, 4, 8] {
            let params = RunParams::builder()
                .workers(workers)
                .partition(strategy)
                .build()
                .unwrap();
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), workers),
                &params,
                |b, params| b.iter(|| compute_separation_stats(black_box(&catalog), params)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_angular_distance, bench_full_scan);
criterion_main!(benches);
