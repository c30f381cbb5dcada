//! Benchmark for encoding and validating structural forms.
//!
//! Compares the bridge against the serde impls and a plain `serde_json`
//! round trip of the payload.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rusty_results::bridge::{BoxError, Deserialized, StructuralBridge};
use rusty_results::container::{Optional, Outcome};
use serde_json::{Value, json};
use std::hint::black_box;

// =============================================================================
// Encode
// =============================================================================

fn benchmark_encode(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("structural_encode");
    let bridge = StructuralBridge::default();

    for size in [1, 100, 10000] {
        let payload: Vec<i32> = (0..size).collect();
        let optional = Optional::Present(payload.clone());

        group.bench_with_input(BenchmarkId::new("bridge", size), &size, |bencher, _| {
            bencher.iter(|| black_box(bridge.encode_optional(&optional).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("serde", size), &size, |bencher, _| {
            bencher.iter(|| black_box(serde_json::to_value(&optional).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("payload_only", size), &size, |bencher, _| {
            bencher.iter(|| black_box(serde_json::to_value(&payload).unwrap()));
        });
    }

    group.finish();
}

// =============================================================================
// Decode
// =============================================================================

fn benchmark_decode(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("structural_decode");
    let bridge = StructuralBridge::default();

    for size in [1, 100, 10000] {
        let payload: Vec<i32> = (0..size).collect();
        let raw = json!({ "value": payload });

        group.bench_with_input(BenchmarkId::new("bridge", size), &size, |bencher, _| {
            bencher.iter(|| {
                let decoded: Outcome<Vec<i32>, String> = bridge
                    .decode_outcome(&raw, &Deserialized::new(), &Deserialized::new())
                    .unwrap();
                black_box(decoded)
            });
        });

        group.bench_with_input(BenchmarkId::new("serde", size), &size, |bencher, _| {
            bencher.iter(|| {
                let decoded: Outcome<Vec<i32>, String> = serde_json::from_value(raw.clone()).unwrap();
                black_box(decoded)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Rejection
// =============================================================================

fn benchmark_rejection(criterion: &mut Criterion) {
    let bridge = StructuralBridge::default();
    let non_empty = |raw: &Value| -> Result<String, BoxError> {
        match raw.as_str() {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err("expected a non-empty string".into()),
        }
    };
    let invalid = [
        json!({"value": ""}),
        json!({"value": "foo", "extra": "bar"}),
        json!({"value": null}),
        json!("not a mapping"),
    ];

    criterion.bench_function("structural_rejection", |bencher| {
        bencher.iter(|| {
            for raw in &invalid {
                black_box(bridge.decode_optional(raw, &non_empty).is_err());
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_decode,
    benchmark_rejection
);
criterion_main!(benches);
