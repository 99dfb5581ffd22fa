use criterion::{criterion_group, criterion_main, Criterion};
use optiseed::{Lhs, LhsOptimization, ParamGuard, SamplingMethod};

fn criterion_lhs(c: &mut Criterion) {
    let dims = [5, 50];
    let sizes = [10, 100];
    let optimizations = [None, Some(LhsOptimization::RandomCd)];

    let mut group = c.benchmark_group("doe");
    group.sample_size(10);
    for dim in dims {
        for size in sizes {
            for optimization in optimizations {
                group.bench_function(
                    format!("lhs-{optimization:?}-{dim}-dim-{size}-size"),
                    |b| {
                        let lhs = Lhs::<f64>::params(dim)
                            .optimization(optimization)
                            .seed(Some(42))
                            .check()
                            .unwrap();
                        b.iter(|| std::hint::black_box(lhs.sample(size).unwrap()));
                    },
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, criterion_lhs);
criterion_main!(benches);
