//! Benchmarks for similarity scoring and dispatch
//!
//! Run with: cargo bench --package recommender

use catalog::Catalog;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use recommender::{Dispatcher, SimilarityRanker, similarity};
use std::sync::Arc;

fn bench_similarity(c: &mut Criterion) {
    let a = "a teacher with tourette syndrome turns her weakness into strength";
    let b = "a teacher inspires at-risk students with writing";

    c.bench_function("similarity", |bench| {
        bench.iter(|| black_box(similarity(black_box(a), black_box(b))))
    });
}

fn bench_rank(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let ranker = SimilarityRanker::new();
    let query = &catalog.films()[0];

    c.bench_function("rank_builtin_catalog", |b| {
        b.iter(|| {
            let ranked = ranker.rank(black_box(query), &catalog);
            black_box(ranked.len())
        })
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let dispatcher = Dispatcher::new(Arc::new(Catalog::builtin()));

    c.bench_function("dispatch_exact_title", |b| {
        b.iter(|| {
            let outcome = dispatcher.dispatch(black_box("Freedom Writers"));
            black_box(outcome.names().len())
        })
    });
}

criterion_group!(benches, bench_similarity, bench_rank, bench_dispatch);
criterion_main!(benches);
