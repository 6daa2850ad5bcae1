use binarch_core::{decode_into, to_bytes, Encoder};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::BTreeMap;

fn bench_bulk_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_sequence");

    for size in [256, 4096, 65536] {
        let values: Vec<u64> = (0..size as u64).collect();

        group.throughput(Throughput::Bytes((size * 8) as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &values, |b, values| {
            let mut buf: Vec<u8> = Vec::with_capacity(size * 8 + 8);
            b.iter(|| {
                buf.clear();
                Encoder::new(&mut buf).encode(black_box(values)).unwrap()
            });
        });

        let encoded = to_bytes(&values).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, data| {
            let mut slot: Vec<u64> = Vec::new();
            b.iter(|| decode_into(black_box(data), &mut slot).unwrap());
        });
    }

    group.finish();
}

fn bench_element_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("element_sequence");

    for size in [256, 4096] {
        let values: Vec<String> = (0..size).map(|i| format!("item-{}", i)).collect();
        let encoded = to_bytes(&values).unwrap();

        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &values, |b, values| {
            b.iter(|| to_bytes(black_box(values)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, data| {
            let mut slot: Vec<String> = Vec::new();
            b.iter(|| decode_into(black_box(data), &mut slot).unwrap());
        });
    }

    group.finish();
}

fn bench_nested_map(c: &mut Criterion) {
    let map: BTreeMap<String, Vec<Option<(u32, f64)>>> = (0..1000)
        .map(|i| {
            let row = (0..16)
                .map(|j| if j % 3 == 0 { None } else { Some((j, j as f64 * 0.5)) })
                .collect();
            (format!("key-{:04}", i), row)
        })
        .collect();
    let encoded = to_bytes(&map).unwrap();

    let mut group = c.benchmark_group("nested_map");
    group.throughput(Throughput::Bytes(encoded.len() as u64));
    group.bench_function("encode", |b| b.iter(|| to_bytes(black_box(&map)).unwrap()));
    group.bench_function("decode", |b| {
        let mut slot: BTreeMap<String, Vec<Option<(u32, f64)>>> = BTreeMap::new();
        b.iter(|| decode_into(black_box(&encoded), &mut slot).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_bulk_sequence, bench_element_sequence, bench_nested_map);
criterion_main!(benches);
