use cache_replacement::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

/// Pre-generates a reproducible access pattern over a set's ways.
fn access_pattern(ways: usize, len: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..ways)).collect()
}

/// Bench: hit-heavy workload, mostly touches with the occasional eviction
fn bench_touch_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("LRU Touch-Heavy");
    for &ways in &[4usize, 8, 16, 64] {
        let pattern = access_pattern(ways, 4096, 0x1A11);
        group.bench_with_input(BenchmarkId::new("LRU", ways), &ways, |b, &ways| {
            b.iter(|| {
                let mut policy = LruReplacement::new(ways);
                let mut victims = 0usize;
                for (i, &way) in pattern.iter().enumerate() {
                    if i % 8 == 0 {
                        victims ^= policy.update();
                    } else {
                        policy.touch(way);
                    }
                }
                victims
            })
        });
    }
    group.finish();
}

/// Bench: miss-heavy workload, every access evicts
fn bench_update_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("LRU Update-Only");
    for &ways in &[4usize, 8, 16, 64] {
        group.bench_with_input(BenchmarkId::new("LRU", ways), &ways, |b, &ways| {
            b.iter(|| {
                let mut policy = LruReplacement::new(ways);
                let mut victims = 0usize;
                for _ in 0..4096 {
                    victims ^= policy.update();
                }
                victims
            })
        });
    }
    group.finish();
}

/// Bench: invalidation mixed into a touch workload
fn bench_invalidation_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("LRU Invalidation Mix");
    for &ways in &[8usize, 64] {
        let pattern = access_pattern(ways, 4096, 0xE5A5);
        group.bench_with_input(BenchmarkId::new("LRU", ways), &ways, |b, _| {
            b.iter(|| {
                let mut policy = LruReplacement::new(ways);
                let mut victims = 0usize;
                for (i, &way) in pattern.iter().enumerate() {
                    match i % 16 {
                        0 => policy.set_to_erase(way).unwrap(),
                        1 => victims ^= policy.update(),
                        _ => policy.touch(way),
                    }
                }
                victims
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_touch_heavy,
    bench_update_only,
    bench_invalidation_mix
);
criterion_main!(benches);
