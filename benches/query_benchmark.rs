use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use std::sync::Arc;
use wanderhub::catalog::store::{Catalog, CATALOG_CAPACITY};
use wanderhub::core::types::PackageRecord;
use wanderhub::parallel::{self, Backend, BackendKind};

fn synthetic_catalog() -> Arc<Catalog> {
    let mut rng = rand::thread_rng();
    let provinces = ["Sindh", "Punjab", "Gilgit", "KPK", "Balochistan"];
    let categories = ["Nature", "Beach", "Historical", "Adventure"];
    let records = (0..CATALOG_CAPACITY)
        .map(|i| PackageRecord {
            id: format!("PKG{i:04}"),
            place_name: format!("Place {i}"),
            province: provinces[rng.gen_range(0..provinces.len())].to_string(),
            category: categories[rng.gen_range(0..categories.len())].to_string(),
            duration_days: rng.gen_range(1..15),
            avg_price: rng.gen_range(3000.0..80000.0),
            rating: rng.gen_range(2.5..5.0),
            review_count: rng.gen_range(0..1000),
            popularity_score: rng.gen_range(0.0..10.0),
        })
        .collect();
    Arc::new(Catalog::from_records(records))
}

fn bench_backends(c: &mut Criterion) {
    let catalog = synthetic_catalog();
    let query = "PROVINCE=Sindh;CATEGORY=Nature;BUDGET_MAX=40000;TOPK=10";

    let mut group = c.benchmark_group("query");
    for kind in [BackendKind::Serial, BackendKind::Pool, BackendKind::LoopParallel, BackendKind::Ranks] {
        let backend = parallel::create(kind, catalog.clone(), 4).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(backend.name()),
            &backend,
            |b, backend| {
                b.iter(|| black_box(backend.execute(query)));
            },
        );
    }
    group.finish();
}

fn bench_worker_counts(c: &mut Criterion) {
    let catalog = synthetic_catalog();
    let query = "MIN_RATING=4.0;TOPK=20";

    let mut group = c.benchmark_group("pool_workers");
    for workers in [1, 2, 4, 8] {
        let backend = parallel::create(BackendKind::Pool, catalog.clone(), workers).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(workers), &backend, |b, backend| {
            b.iter(|| black_box(backend.execute(query)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_backends, bench_worker_counts);
criterion_main!(benches);
