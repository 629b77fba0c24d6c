//! Performance comparison: IntervalHeapStore vs SortedStore
//!
//! Run with:
//! ```bash
//! cargo bench --bench stores
//! ```

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use depq::{IntervalHeapStore, SortedStore};

const COUNT: usize = 10_000;

/// Deterministic scramble so both stores see identical priority streams.
#[inline]
fn scramble(i: usize) -> u64 {
    ((i * 7 + 13) % COUNT) as u64
}

// ============================================================================
// INSERT benchmarks (steady-state with clear())
// ============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("INSERT");
    group.throughput(Throughput::Elements(COUNT as u64));

    group.bench_function("interval-heap", |b| {
        let mut store: IntervalHeapStore<u64, u64> = IntervalHeapStore::with_capacity(COUNT);

        b.iter(|| {
            store.clear();
            for i in 0..COUNT {
                store.insert(i as u64, black_box(scramble(i)));
            }
        });
    });

    group.bench_function("sorted", |b| {
        let mut store: SortedStore<u64, u64> = SortedStore::new();

        b.iter(|| {
            store.clear();
            for i in 0..COUNT {
                store.insert(i as u64, black_box(scramble(i)));
            }
        });
    });

    group.finish();
}

// ============================================================================
// DRAIN benchmarks (fill, then extract everything from one end)
// ============================================================================

fn bench_drain_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("DRAIN_min");
    group.throughput(Throughput::Elements(COUNT as u64));

    group.bench_function("interval-heap", |b| {
        let mut store: IntervalHeapStore<u64, u64> = IntervalHeapStore::with_capacity(COUNT);

        b.iter(|| {
            for i in 0..COUNT {
                store.insert(i as u64, scramble(i));
            }
            while let Ok(item) = store.extract_min() {
                black_box(item);
            }
        });
    });

    group.bench_function("sorted", |b| {
        let mut store: SortedStore<u64, u64> = SortedStore::new();

        b.iter(|| {
            for i in 0..COUNT {
                store.insert(i as u64, scramble(i));
            }
            while let Ok(item) = store.extract_min() {
                black_box(item);
            }
        });
    });

    group.finish();
}

fn bench_drain_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("DRAIN_max");
    group.throughput(Throughput::Elements(COUNT as u64));

    group.bench_function("interval-heap", |b| {
        let mut store: IntervalHeapStore<u64, u64> = IntervalHeapStore::with_capacity(COUNT);

        b.iter(|| {
            for i in 0..COUNT {
                store.insert(i as u64, scramble(i));
            }
            while let Ok(item) = store.extract_max() {
                black_box(item);
            }
        });
    });

    group.bench_function("sorted", |b| {
        let mut store: SortedStore<u64, u64> = SortedStore::new();

        b.iter(|| {
            for i in 0..COUNT {
                store.insert(i as u64, scramble(i));
            }
            while let Ok(item) = store.extract_max() {
                black_box(item);
            }
        });
    });

    group.finish();
}

// ============================================================================
// MIXED benchmark (steady-state: alternate both ends, reinsert)
// ============================================================================

fn bench_mixed(c: &mut Criterion) {
    const STEADY: usize = 1_024;

    let mut group = c.benchmark_group("MIXED");
    group.throughput(Throughput::Elements(4));

    group.bench_function("interval-heap", |b| {
        let mut store: IntervalHeapStore<u64, u64> = IntervalHeapStore::with_capacity(STEADY);
        for i in 0..STEADY {
            store.insert(i as u64, scramble(i));
        }

        let mut tick = 0u64;
        b.iter(|| {
            let min = store.extract_min().unwrap();
            store.insert(min, min.wrapping_add(tick) % STEADY as u64);
            let max = store.extract_max().unwrap();
            store.insert(max, max.wrapping_mul(7) % STEADY as u64);
            tick = tick.wrapping_add(1);
        });
    });

    group.bench_function("sorted", |b| {
        let mut store: SortedStore<u64, u64> = SortedStore::new();
        for i in 0..STEADY {
            store.insert(i as u64, scramble(i));
        }

        let mut tick = 0u64;
        b.iter(|| {
            let min = store.extract_min().unwrap();
            store.insert(min, min.wrapping_add(tick) % STEADY as u64);
            let max = store.extract_max().unwrap();
            store.insert(max, max.wrapping_mul(7) % STEADY as u64);
            tick = tick.wrapping_add(1);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_drain_min,
    bench_drain_max,
    bench_mixed
);
criterion_main!(benches);
