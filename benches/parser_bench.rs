use caret_json::{format, parse, parse_str, tokenize, Value};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// A sample "medium" JSON document
const MEDIUM_JSON: &str = r#"
{
    "name": "Babbage",
    "age": 30,
    "admin": true,
    "friends": ["Ada", "Charles", "Grace"],
    "tasks": [
        { "id": 1, "title": "Parse JSON", "done": false },
        { "id": 2, "title": "Write docs\nand\ttests", "done": true }
    ],
    "nested": {"key": [null, 1, 1.23e4]}
}
"#;

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("JSON Parsing");

    group.bench_function("tokenize", |b| {
        b.iter(|| tokenize(black_box(MEDIUM_JSON)).unwrap())
    });

    let tokens = tokenize(MEDIUM_JSON).unwrap();
    group.bench_function("parse (tokens)", |b| {
        b.iter(|| parse(black_box(&tokens)).unwrap())
    });

    group.bench_function("parse_str", |b| {
        b.iter(|| parse_str(black_box(MEDIUM_JSON)).unwrap())
    });

    group.bench_function("serde_json::from_str", |b| {
        b.iter(|| {
            let _: serde_json::Value = serde_json::from_str(black_box(MEDIUM_JSON)).unwrap();
        })
    });

    group.finish();
}

fn bench_stringifying(c: &mut Criterion) {
    let value: Value = parse_str(MEDIUM_JSON).unwrap();
    let serde_value: serde_json::Value = serde_json::from_str(MEDIUM_JSON).unwrap();

    let mut group = c.benchmark_group("JSON Stringify");

    group.bench_function("stringify", |b| b.iter(|| black_box(&value).stringify()));

    group.bench_function("stringify_pretty", |b| {
        b.iter(|| black_box(&value).stringify_pretty())
    });

    group.bench_function("format", |b| {
        b.iter(|| format(black_box(MEDIUM_JSON)).unwrap())
    });

    group.bench_function("serde_json::to_string", |b| {
        b.iter(|| serde_json::to_string(black_box(&serde_value)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_stringifying);
criterion_main!(benches);
