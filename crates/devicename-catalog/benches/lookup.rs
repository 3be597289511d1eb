//! Static table lookup benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use devicename_catalog::{device_name, device_name_for, StaticTable};
use std::hint::black_box;

fn bench_lookup(c: &mut Criterion) {
    // Build the index outside the measured loop
    let _ = StaticTable::global();

    let mut group = c.benchmark_group("static_table");
    group.bench_function("codename_hit", |b| {
        b.iter(|| device_name(black_box("zerolte"), black_box("fallback")))
    });
    group.bench_function("model_hit", |b| {
        b.iter(|| device_name_for(black_box(None), black_box(Some("SM-G925I")), "fallback"))
    });
    group.bench_function("miss", |b| {
        b.iter(|| device_name_for(black_box(Some("unknown-xyz")), None, "Unknown device"))
    });
    group.finish();
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
