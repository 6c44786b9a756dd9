//! Throughput of the varint-family encoders, the busiest hot path in the
//! writer's op pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pb_wire_writer::Writer;
use rand::prelude::*;

fn random_u32_values(count: usize) -> Vec<u32> {
    let mut rng = rand::rng();
    (0..count).map(|_| rng.random()).collect()
}

fn random_i64_values(count: usize) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..count).map(|_| rng.random()).collect()
}

fn uint32_benchmark(c: &mut Criterion) {
    let values = random_u32_values(1024);
    let mut group = c.benchmark_group("uint32");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("write_and_finish", |b| {
        b.iter(|| {
            let mut w = Writer::with_capacity(values.len());
            for v in &values {
                w.uint32(black_box(*v));
            }
            black_box(w.finish())
        });
    });
    group.finish();
}

fn sint64_benchmark(c: &mut Criterion) {
    let values = random_i64_values(1024);
    let mut group = c.benchmark_group("sint64");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("write_and_finish", |b| {
        b.iter(|| {
            let mut w = Writer::with_capacity(values.len());
            for v in &values {
                w.sint64(black_box(*v));
            }
            black_box(w.finish())
        });
    });
    group.finish();
}

fn tag_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tag");
    group.throughput(Throughput::Elements(1024));
    group.bench_function("small_field_ids", |b| {
        b.iter(|| {
            let mut w = Writer::with_capacity(1024);
            for id in 1..=1024u32 {
                w.tag(black_box(id), 0);
            }
            black_box(w.finish())
        });
    });
    group.finish();
}

criterion_group!(
    name = varint_benchmark;
    config = Criterion::default();
    targets = uint32_benchmark, sint64_benchmark, tag_benchmark
);
criterion_main!(varint_benchmark);
