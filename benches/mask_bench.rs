use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use normalizer::{hash_id, mask_pii, normalize};
use serde_json::json;
use std::hint::black_box;

const CLEAN_TEXT: &str = "Hi! Just checking whether the blue jacket is back in stock in size M.";

const PII_TEXT: &str = "Hey, order #A1-99812 never arrived. Call me at +44 20 7946 0958 or \
mail jane.doe@example.com, tracking page https://track.example.com/p?id=99812 is empty.";

/// Benchmark masking on clean text vs text that hits every rule
fn bench_mask(c: &mut Criterion) {
    let mut group = c.benchmark_group("mask_pii");

    group.throughput(Throughput::Bytes(CLEAN_TEXT.len() as u64));
    group.bench_function("clean", |b| b.iter(|| mask_pii(black_box(CLEAN_TEXT))));

    group.throughput(Throughput::Bytes(PII_TEXT.len() as u64));
    group.bench_function("all_rules", |b| b.iter(|| mask_pii(black_box(PII_TEXT))));

    let long = PII_TEXT.repeat(64);
    group.throughput(Throughput::Bytes(long.len() as u64));
    group.bench_function("all_rules_x64", |b| b.iter(|| mask_pii(black_box(&long))));

    group.finish();
}

fn bench_hash_id(c: &mut Criterion) {
    c.bench_function("hash_id", |b| b.iter(|| hash_id(black_box("6543210987654321"))));
}

/// Benchmark a full Messenger payload through the default registry
fn bench_normalize_facebook(c: &mut Criterion) {
    let raw = json!({"object": "page", "entry": [{"id": "PAGE_1", "time": 1700000000000u64, "messaging": [{
        "sender": {"id": "6543210987654321"},
        "recipient": {"id": "PAGE_1"},
        "timestamp": 1700000000000u64,
        "message": {"mid": "m_abc123", "text": PII_TEXT}
    }]}]});

    c.bench_function("normalize_facebook", |b| {
        b.iter(|| normalize(black_box("facebook"), black_box(&raw)))
    });
}

criterion_group!(benches, bench_mask, bench_hash_id, bench_normalize_facebook);
criterion_main!(benches);
