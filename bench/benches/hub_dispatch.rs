//! Hub benchmarks using Criterion.
//!
//! - Handler registration
//! - Fan-out of one send to N handlers, one thread per invocation
//! - Sends whose handlers all take another type (lookup and skip only)

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rusty_hub::{Hub, HubConfig, callable};
use rusty_hub_bench::fixtures::{EVENT, FanoutFixture, Tick};

const TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Registration Benchmarks
// =============================================================================

fn bench_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("register");

    for count in [10, 100, 1_000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("closure", count), &count, |b, &n| {
            b.iter(|| {
                let hub = Hub::new();
                for _ in 0..n {
                    hub.register(EVENT, |tick: Tick| {
                        black_box(tick);
                    })
                    .unwrap();
                }
                black_box(hub);
            });
        });

        group.bench_with_input(BenchmarkId::new("dynamic", count), &count, |b, &n| {
            let handler = callable(|tick: Tick| {
                black_box(tick);
            });
            b.iter(|| {
                let hub = Hub::new();
                for _ in 0..n {
                    hub.handle(EVENT, handler.clone()).unwrap();
                }
                black_box(hub);
            });
        });
    }

    group.finish();
}

// =============================================================================
// Fan-out Benchmarks
// =============================================================================

fn bench_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("fanout");

    for handlers in [1, 8, 64] {
        group.throughput(Throughput::Elements(handlers as u64));

        group.bench_with_input(BenchmarkId::new("thread", handlers), &handlers, |b, &n| {
            let fixture = FanoutFixture::new(n, HubConfig::default()).unwrap();
            let mut frame = 0;
            b.iter(|| {
                frame += 1;
                fixture.send_and_wait(frame, TIMEOUT).unwrap();
            });
        });
    }

    group.finish();
}

// =============================================================================
// Mismatch Benchmarks
// =============================================================================

fn bench_mismatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("mismatch");

    for handlers in [1, 64, 1_024] {
        group.bench_with_input(BenchmarkId::new("skip_all", handlers), &handlers, |b, &n| {
            let fixture = FanoutFixture::new(n, HubConfig::default()).unwrap();
            b.iter(|| {
                let launched = fixture.hub().send(EVENT, black_box(42_u8)).unwrap();
                assert_eq!(launched, 0);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_register, bench_fanout, bench_mismatch);
criterion_main!(benches);
