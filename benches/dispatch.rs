// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for view dispatch.
//!
//! Measures the performance of:
//! - Publishing a view to a registered container
//! - Draining a burst of events through a `ContainerQueue`

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use overlay_container::configuration::{ContainerConfiguration, ContainerViewConfiguration};
use overlay_container::container::{ContainerManager, ContainerQueue};
use overlay_container::diagnostics::{DiagnosticsHandle, NullLogger};
use overlay_container::domain::container::ChannelCapacity;
use std::hint::black_box;
use std::time::Instant;

const BURST: usize = 64;

fn quiet_manager() -> ContainerManager {
    ContainerManager::with_diagnostics(
        DiagnosticsHandle::new(NullLogger),
        ChannelCapacity::new(BURST),
    )
}

/// Benchmark a single `show` call, including envelope construction.
fn bench_show(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    let manager = quiet_manager();
    let mut subscription = manager.register_container("toasts");

    group.bench_function("show", |b| {
        b.iter(|| {
            let id = manager.show(
                black_box("toast"),
                "toasts",
                ContainerViewConfiguration::default(),
            );
            black_box(id);
            // Keep the channel from lagging.
            black_box(subscription.try_next());
        });
    });

    group.finish();
}

/// Benchmark pumping a burst of shows into a queue and ticking it.
fn bench_pump(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    group.bench_function("pump_burst", |b| {
        b.iter_batched(
            || {
                let manager = quiet_manager();
                let subscription = manager.register_container("toasts");
                for index in 0..BURST {
                    manager.show(index, "toasts", ContainerViewConfiguration::default());
                }
                (manager, subscription)
            },
            |(_manager, mut subscription)| {
                let now = Instant::now();
                let mut queue = ContainerQueue::new(ContainerConfiguration::default());
                queue.pump(&mut subscription, now);
                queue.tick(now);
                black_box(queue.visible_count());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_show, bench_pump);
criterion_main!(benches);
