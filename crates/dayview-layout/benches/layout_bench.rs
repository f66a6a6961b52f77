//! Benchmarks for event column partitioning and placement.
//!
//! Run with: cargo bench -p dayview-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dayview_core::{BorderMetrics, Event};
use dayview_layout::{assign_columns, compute_placement};
use std::hint::black_box;

fn ev(start: i32, end: i32) -> Event {
    Event::new(start, end).expect("valid bench event")
}

/// Back-to-back events with one-minute gaps: every event is its own cluster.
fn disjoint(n: i32) -> Vec<Event> {
    (0..n).map(|i| ev(i * 20, i * 20 + 18)).collect()
}

/// A staircase of overlapping events: one long cluster, few columns.
fn staircase(n: i32) -> Vec<Event> {
    (0..n).map(|i| ev(i * 5, i * 5 + 60)).collect()
}

/// Fully stacked events: one cluster, one column per event.
fn stacked(n: i32) -> Vec<Event> {
    (0..n).map(|_| ev(0, 700)).collect()
}

fn bench_assign_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/assign_columns");

    for n in [10, 100, 1000] {
        for (pattern, events) in [
            ("disjoint", disjoint(n)),
            ("staircase", staircase(n)),
            ("stacked", stacked(n)),
        ] {
            group.bench_with_input(
                BenchmarkId::new(pattern, n),
                &events,
                |b, events| {
                    b.iter(|| black_box(assign_columns(black_box(events))));
                },
            );
        }
    }

    group.finish();
}

fn bench_compute_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/compute_placement");
    let border = BorderMetrics::DEFAULT;
    let event = ev(540, 600);

    group.bench_function("4_columns", |b| {
        b.iter(|| {
            black_box(compute_placement(
                black_box(4),
                black_box(3),
                black_box(event),
                &border,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_assign_columns, bench_compute_placement);
criterion_main!(benches);
