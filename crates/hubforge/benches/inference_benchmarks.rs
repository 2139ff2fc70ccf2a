//! Inference performance benchmarks.
//!
//! Measures subset construction and multi-subset model building across
//! different column counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hubforge::{DatasetCreationBuilder, Subset};
use serde_json::{json, Map, Value};

/// Generate a subset descriptor with a mix of column kinds.
fn generate_descriptor(cols: usize) -> Value {
    let mut features = Map::new();
    for col in 0..cols {
        let raw = match col % 5 {
            0 => json!({"dtype": "string", "_type": "Value"}),
            1 => json!({"dtype": "float64", "_type": "Value"}),
            2 => json!({"dtype": "int64", "_type": "ClassLabel", "names": ["a", "b", "c"]}),
            3 => json!({"_type": "Image"}),
            4 => json!({
                "content": {"dtype": "string", "_type": "Value"},
                "role": {"dtype": "string", "_type": "Value"}
            }),
            _ => unreachable!(),
        };
        features.insert(format!("column_{}", col + 1), raw);
    }
    json!({ "features": features })
}

/// Benchmark building a single subset.
fn bench_subset(c: &mut Criterion) {
    let mut group = c.benchmark_group("subset");

    for cols in [10, 100, 1_000].iter() {
        let descriptor = generate_descriptor(*cols);

        group.throughput(Throughput::Elements(*cols as u64));
        group.bench_with_input(BenchmarkId::new("columns", cols), &descriptor, |b, descriptor| {
            b.iter(|| Subset::from_descriptor("default", black_box(descriptor)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark building a model with many subsets.
fn bench_multi_subset(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_subset");

    for subsets in [2, 20, 200].iter() {
        let mut raw = Map::new();
        raw.insert("default".to_string(), json!(true));
        for i in 0..*subsets {
            raw.insert(format!("subset_{i}"), generate_descriptor(20));
        }
        let raw = Value::Object(raw);

        group.bench_with_input(BenchmarkId::new("subsets", subsets), &raw, |b, raw| {
            b.iter(|| DatasetCreationBuilder::new(black_box(raw.clone())).build().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_subset, bench_multi_subset);
criterion_main!(benches);
