//! Benchmarks for case conversion, flattening and chained units
//!
//! Copyright (c) 2025 Remold Team
//! Licensed under the Apache-2.0 license

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use remold_core::text::case::{to_camel, to_snake};
use remold_core::{Case, CaseUnit, Chain, FlattenUnit, KeyCaseUnit, SlugUnit, Unit};
use serde_json::{json, Map, Value};

fn nested_object(depth: usize, width: usize) -> Value {
    if depth == 0 {
        return json!("leaf");
    }
    let map: Map<String, Value> = (0..width)
        .map(|i| (format!("someFieldName{}", i), nested_object(depth - 1, width)))
        .collect();
    Value::Object(map)
}

fn bench_case_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("case_conversion");

    for input in ["helloWorld", "XMLHttpRequestHandler", "some_long_snake_case_identifier_name"] {
        group.bench_with_input(BenchmarkId::new("to_snake", input), input, |b, input| {
            b.iter(|| to_snake(black_box(input)))
        });
        group.bench_with_input(BenchmarkId::new("to_camel", input), input, |b, input| {
            b.iter(|| to_camel(black_box(input)))
        });
    }

    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");
    let unit = FlattenUnit::default();

    for depth in [2, 4, 6] {
        let data = nested_object(depth, 3);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &data, |b, data| {
            b.iter(|| unit.process(black_box(data.clone())))
        });
    }

    group.finish();
}

fn bench_key_case(c: &mut Criterion) {
    let unit = KeyCaseUnit::new(Case::Snake);
    let data = nested_object(4, 4);

    c.bench_function("key_case_nested", |b| {
        b.iter(|| unit.process(black_box(data.clone())))
    });
}

fn bench_chain(c: &mut Criterion) {
    let chain = Chain::new()
        .then(CaseUnit::new(Case::Title))
        .then(SlugUnit::default());

    c.bench_function("chain_title_slug", |b| {
        b.iter(|| chain.process(black_box(json!("Crème brûlée & Café au lait"))))
    });
}

criterion_group!(
    benches,
    bench_case_conversion,
    bench_flatten,
    bench_key_case,
    bench_chain
);
criterion_main!(benches);
