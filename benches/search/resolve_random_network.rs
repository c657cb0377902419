use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nearest_store::prelude::*;
use rand::prelude::*;
use road_reader::{Arc, CityRecord, DestinationRecord};

criterion_group!(benches, resolve_benchmark, search_benchmark);
criterion_main!(benches);

/// Random network with `n` cities, every tenth one a store.
fn random_network(n: usize, rng: &mut StdRng) -> (CityCatalog, DistanceIndex) {
    let cities: Vec<CityRecord> = (0..n)
        .map(|i| CityRecord {
            id: format!("c{i}"),
            is_store: i % 10 == 0,
        })
        .collect();
    let destinations: Vec<DestinationRecord> = (0..n)
        .filter(|i| i % 10 != 0)
        .take(10)
        .map(|i| DestinationRecord {
            id: format!("c{i}"),
            included: true,
        })
        .collect();
    let arcs: Vec<Arc> = (0..n * 4)
        .map(|_| {
            let source = rng.gen_range(0..n);
            let target = rng.gen_range(0..n);
            Arc::new(format!("c{source}"), format!("c{target}"), rng.gen_range(1..100))
        })
        .collect();

    let catalog = CityCatalog::new(&cities, &destinations).unwrap();
    (catalog, DistanceIndex::from_arcs(&arcs))
}

fn resolve_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("resolve_all");
    for size in [100, 500, 1000].iter() {
        let (catalog, index) = random_network(*size, &mut rng);
        let resolver = NearestStoreResolver::new(&catalog, &index).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &resolver, |b, resolver| {
            b.iter(|| black_box(resolver.resolve_all()))
        });
    }
    group.finish();
}

fn search_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let (catalog, index) = random_network(1000, &mut rng);

    c.bench_with_input(
        BenchmarkId::new("dijkstra_on_random_network", 1000),
        &(catalog, index),
        |b, (catalog, index)| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(index);
                black_box(dijkstra.search("c1", catalog.cities()).unwrap().reachable());
            })
        },
    );
}
