use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use road_reader::{read_roads, ReaderOptions};

criterion_group!(benches, parse_roads);
criterion_main!(benches);

fn parse_roads(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("read_roads");
    for lines in [1_000, 10_000, 100_000].iter() {
        let input: String = (0..*lines)
            .map(|_| {
                format!(
                    "c{},c{},{}\n",
                    rng.gen_range(0..1000),
                    rng.gen_range(0..1000),
                    rng.gen_range(1..100)
                )
            })
            .collect();

        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &input, |b, input| {
            b.iter(|| black_box(read_roads(input.as_bytes(), &ReaderOptions::default()).unwrap()))
        });
    }
    group.finish();
}
