//! Criterion benchmarks for suggestion lookups
//!
//! Every lookup imports the index from its serialized form, so index size
//! dominates the cost.

use autocomplete_suggest::search::{SearchMode, SuggestionIndex};
use autocomplete_suggest::store::InMemoryIndexStore;
use autocomplete_suggest::suggest::{resolve, SuggestOptions};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokio::runtime::Runtime;

fn platform_values(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("Platform-{} Orbiter {}", i % 97, i))
        .collect()
}

fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_import");

    for size in [100, 1_000, 10_000] {
        let bytes = SuggestionIndex::build(platform_values(size))
            .unwrap()
            .export()
            .unwrap();

        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| SuggestionIndex::import(black_box(bytes)).unwrap());
        });
    }

    group.finish();
}

fn bench_search_modes(c: &mut Criterion) {
    let index = SuggestionIndex::build(platform_values(10_000)).unwrap();

    c.bench_function("search_speed", |b| {
        b.iter(|| index.search(black_box("orbiter"), 10, SearchMode::Speed).unwrap());
    });

    c.bench_function("search_match", |b| {
        b.iter(|| index.search(black_box("platform orb"), 10, SearchMode::Match).unwrap());
    });
}

fn bench_resolve(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let store = InMemoryIndexStore::new();
    store.insert(
        "platform",
        SuggestionIndex::build(platform_values(1_000))
            .unwrap()
            .export()
            .unwrap(),
    );

    c.bench_function("resolve_hit", |b| {
        b.to_async(&rt).iter(|| async {
            resolve(&store, "platform", black_box("orbiter"), None).await
        });
    });

    c.bench_function("resolve_miss", |b| {
        b.to_async(&rt).iter(|| async {
            resolve(&store, "instrument", black_box("modis"), None).await
        });
    });

    c.bench_function("resolve_limit_1", |b| {
        let options = SuggestOptions::new().with_limit(1);
        b.to_async(&rt).iter(|| async {
            resolve(&store, "platform", black_box("orbiter"), Some(options)).await
        });
    });
}

criterion_group!(benches, bench_import, bench_search_modes, bench_resolve);
criterion_main!(benches);
