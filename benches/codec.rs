use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_ini::{decode, encode, escape_str, from_str, to_string, unescape, EncodeOptions};

#[derive(Serialize, Deserialize, Clone)]
struct Server {
    host: String,
    port: u16,
    tls: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Config {
    name: String,
    workers: u32,
    allowed: Vec<String>,
    server: Server,
}

fn sample_config() -> Config {
    Config {
        name: "inventory".to_string(),
        workers: 8,
        allowed: vec!["10.0.0.0/8".to_string(), "192.168.0.0/16".to_string()],
        server: Server {
            host: "localhost".to_string(),
            port: 8080,
            tls: true,
        },
    }
}

/// A document with `sections` sections of ten keys each, plus a dotted
/// subsection and an array per section.
fn generated_ini(sections: usize) -> String {
    let mut text = String::from("; generated\nroot=1\n");
    for s in 0..sections {
        text.push_str(&format!("\n[section{}]\n", s));
        for k in 0..10 {
            text.push_str(&format!("key{} = value {} ; comment\n", k, k));
        }
        text.push_str(&format!("\n[section{}.child]\n", s));
        for k in 0..3 {
            text.push_str(&format!("list[] = item{}\n", k));
        }
    }
    text
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [10, 100, 1000].iter() {
        let text = generated_ini(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| decode(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [10, 100, 1000].iter() {
        let doc = decode(&generated_ini(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| encode(black_box(doc), EncodeOptions::default()))
        });
    }
    group.finish();
}

fn benchmark_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("escaping");

    let plain = "a plain value without anything special";
    let comments = "value; with # comment characters; and more #";
    let quoted = "  needs=quoting\r\n";

    group.bench_function("escape_plain", |b| b.iter(|| escape_str(black_box(plain))));
    group.bench_function("escape_comments", |b| {
        b.iter(|| escape_str(black_box(comments)))
    });
    group.bench_function("escape_quoted", |b| b.iter(|| escape_str(black_box(quoted))));

    let escaped_comments = escape_str(comments);
    let escaped_quoted = escape_str(quoted);

    group.bench_function("unescape_comments", |b| {
        b.iter(|| unescape(black_box(&escaped_comments)))
    });
    group.bench_function("unescape_quoted", |b| {
        b.iter(|| unescape(black_box(&escaped_quoted)))
    });

    group.finish();
}

fn benchmark_serde(c: &mut Criterion) {
    let config = sample_config();
    let text = to_string(&config).unwrap();

    c.bench_function("serialize_config", |b| {
        b.iter(|| to_string(black_box(&config)))
    });

    c.bench_function("deserialize_config", |b| {
        b.iter(|| from_str::<Config>(black_box(&text)))
    });
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let config = sample_config();

    let mut group = c.benchmark_group("comparison");

    group.bench_function("ini_serialize", |b| {
        b.iter(|| serde_ini::to_string(black_box(&config)))
    });

    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&config)))
    });

    let ini_str = serde_ini::to_string(&config).unwrap();
    let json_str = serde_json::to_string(&config).unwrap();

    group.bench_function("ini_deserialize", |b| {
        b.iter(|| serde_ini::from_str::<Config>(black_box(&ini_str)))
    });

    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<Config>(black_box(&json_str)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_decode,
    benchmark_encode,
    benchmark_escaping,
    benchmark_serde,
    benchmark_comparison_with_json
);
criterion_main!(benches);
