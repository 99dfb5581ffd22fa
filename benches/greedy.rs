use criterion::{criterion_group, criterion_main, Criterion};
use optiseed::{GreedyFarthest, ParamGuard, SamplingMethod};

fn criterion_greedy(c: &mut Criterion) {
    let dims = [2, 10];
    let sizes = [10, 100];

    let mut group = c.benchmark_group("doe");
    group.sample_size(10);
    for dim in dims {
        for size in sizes {
            group.bench_function(format!("greedy-{dim}-dim-{size}-size"), |b| {
                let greedy = GreedyFarthest::<f64>::params(dim)
                    .seed(Some(42))
                    .check()
                    .unwrap();
                b.iter(|| std::hint::black_box(greedy.sample(size).unwrap()));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, criterion_greedy);
criterion_main!(benches);
