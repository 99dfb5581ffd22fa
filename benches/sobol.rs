use criterion::{criterion_group, criterion_main, Criterion};
use optiseed::{ParamGuard, SamplingMethod, Sobol};

fn criterion_sobol(c: &mut Criterion) {
    let dims = [2, 20];
    let sizes = [1024, 65536];

    let mut group = c.benchmark_group("doe");
    group.sample_size(10);
    for dim in dims {
        for size in sizes {
            group.bench_function(format!("sobol-{dim}-dim-{size}-size"), |b| {
                let sobol = Sobol::<f64>::params(dim).seed(Some(42)).check().unwrap();
                b.iter(|| std::hint::black_box(sobol.sample(size).unwrap()));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, criterion_sobol);
criterion_main!(benches);
