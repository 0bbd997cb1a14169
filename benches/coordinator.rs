// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the presentation coordinator.
//!
//! Measures the pure state-machine cost (enqueueing, ticking through
//! animations, draining the queue) against a stub surface and a manual
//! clock, with no renderer involved.

use std::hint::black_box;
use std::time::{Duration, Instant};

use criterion::{criterion_group, criterion_main, Criterion};
use iced_core::Size;
use iced_toast::toast::{Coordinator, OverlaySurface, Toast, ToastId};

struct NullSurface;

impl OverlaySurface for NullSurface {
    fn bounds(&self) -> Size {
        Size::new(400.0, 800.0)
    }

    fn attach(&mut self, _id: ToastId) {}

    fn detach(&mut self, _id: ToastId) {}
}

/// Benchmark enqueueing requests behind a visible toast.
fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinator");

    group.bench_function("enqueue_100", |b| {
        b.iter(|| {
            let mut coordinator = Coordinator::new();
            let mut surface = NullSurface;
            let now = Instant::now();
            for n in 0..100 {
                coordinator.show(Toast::new(format!("toast {n}")), &mut surface, now);
            }
            black_box(coordinator.queued_count());
        });
    });

    group.finish();
}

/// Benchmark driving ten queued toasts through their full lifecycle
/// with a 16ms frame clock.
fn bench_drain_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinator");

    group.bench_function("drain_10_full_lifecycles", |b| {
        b.iter(|| {
            let mut coordinator = Coordinator::new();
            let mut surface = NullSurface;
            let mut now = Instant::now();

            for n in 0..10 {
                coordinator.show(
                    Toast::new(format!("toast {n}")).duration(Duration::from_millis(100)),
                    &mut surface,
                    now,
                );
            }
            while !coordinator.is_idle() {
                now += Duration::from_millis(16);
                coordinator.tick(now, &mut surface);
            }
            black_box(coordinator.is_idle());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_enqueue, bench_drain_queue);
criterion_main!(benches);
