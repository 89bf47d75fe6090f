// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification manager.
//!
//! Measures the performance of:
//! - Admitting distinct messages past capacity (queue growth)
//! - Repeating one message (de-duplication path)
//! - Draining a full stack and queue through `tick`

use criterion::{criterion_group, criterion_main, Criterion};
use iced_notify::notify::{ManagerSettings, NotificationManager};
use iced_notify::scheduler::ManualClock;
use std::hint::black_box;

fn fresh_manager() -> (NotificationManager, ManualClock) {
    let clock = ManualClock::new();
    (
        NotificationManager::new(ManagerSettings::default(), clock.clone()),
        clock,
    )
}

/// Benchmark pushing distinct messages, most of which end up queued.
fn bench_push_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("notify");
    let texts: Vec<String> = (0..1_000).map(|i| format!("message {i}")).collect();

    group.bench_function("push_distinct_1000", |b| {
        b.iter(|| {
            let (mut manager, _clock) = fresh_manager();
            for text in &texts {
                manager.notice(text, None, false);
            }
            black_box(manager.queued_count());
        });
    });

    group.finish();
}

/// Benchmark the repeat path: one cache hit per call.
fn bench_push_repeat(c: &mut Criterion) {
    let mut group = c.benchmark_group("notify");

    group.bench_function("push_repeat_1000", |b| {
        b.iter(|| {
            let (mut manager, _clock) = fresh_manager();
            for i in 0..1_000u64 {
                manager.error("Connection lost", Some(1000 + i), false);
            }
            black_box(manager.visible_count());
        });
    });

    group.finish();
}

/// Benchmark expiring everything, admitting the queue slot by slot.
fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("notify");

    group.bench_function("drain_200", |b| {
        b.iter(|| {
            let (mut manager, clock) = fresh_manager();
            for i in 0..200 {
                manager.notice(format!("message {i}"), None, false);
            }
            while manager.has_notifications() {
                clock.advance_ms(600);
                manager.tick();
            }
            black_box(manager.visible_count());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push_distinct, bench_push_repeat, bench_drain);
criterion_main!(benches);
