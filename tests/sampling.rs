use approx::assert_abs_diff_eq;
use ndarray::{s, Array2};
use optiseed::{
    greedy_farthest_sample, lhs_sample, min_pairwise_distance, sobol_sample, DoeError,
    LhsOptimization,
};

type Bounds<'a> = Option<&'a [(f64, f64)]>;
type Sampler = fn(usize, usize, Option<u64>, Bounds) -> optiseed::Result<Array2<f64>>;

fn sobol(
    n: usize,
    dims: usize,
    seed: Option<u64>,
    bounds: Bounds,
) -> optiseed::Result<Array2<f64>> {
    sobol_sample(n, dims, true, seed, bounds)
}

fn lhs(
    n: usize,
    dims: usize,
    seed: Option<u64>,
    bounds: Bounds,
) -> optiseed::Result<Array2<f64>> {
    lhs_sample(n, dims, 1, Some(LhsOptimization::RandomCd), seed, bounds)
}

fn greedy(
    n: usize,
    dims: usize,
    seed: Option<u64>,
    bounds: Bounds,
) -> optiseed::Result<Array2<f64>> {
    greedy_farthest_sample(n, dims, 50, seed, bounds)
}

const SAMPLERS: [(&str, Sampler); 3] = [("sobol", sobol), ("lhs", lhs), ("greedy", greedy)];

#[test]
fn test_shape_and_unit_range() {
    for (name, sampler) in SAMPLERS {
        for (n, dims) in [(1, 1), (4, 2), (13, 3), (64, 6)] {
            let doe = sampler(n, dims, Some(0), None).unwrap();
            assert_eq!(doe.dim(), (n, dims), "{name}");
            assert!(doe.iter().all(|v| (0. ..=1.).contains(v)), "{name}");
        }
    }
}

#[test]
fn test_bounded_range() {
    let bounds = [(-10., 10.), (0., 1e-3), (5., 6.)];
    for (name, sampler) in SAMPLERS {
        let doe = sampler(20, 3, Some(1), Some(&bounds[..])).unwrap();
        for (col, (lower, upper)) in doe.columns().into_iter().zip(bounds) {
            assert!(col.iter().all(|v| (lower..=upper).contains(v)), "{name}");
        }
    }
}

#[test]
fn test_reproducible_with_seed() {
    for (name, sampler) in SAMPLERS {
        let s1 = sampler(16, 3, Some(123), None).unwrap();
        let s2 = sampler(16, 3, Some(123), None).unwrap();
        assert_eq!(s1, s2, "{name}");
    }
}

#[test]
fn test_unseeded_calls_succeed() {
    for (name, sampler) in SAMPLERS {
        let doe = sampler(8, 2, None, None).unwrap();
        assert_eq!(doe.dim(), (8, 2), "{name}");
    }
}

#[test]
fn test_high_dimensions() {
    let doe = sobol_sample::<f64>(4, 30, true, Some(0), None).unwrap();
    assert_eq!(doe.dim(), (4, 30));
    for (name, sampler) in SAMPLERS {
        let doe = sampler(5, 64, Some(0), None).unwrap();
        assert_eq!(doe.dim(), (5, 64), "{name}");
        assert!(doe.iter().all(|v| (0. ..=1.).contains(v)), "{name}");
    }
}

#[test]
fn test_sobol_scenario() {
    let s1 = sobol_sample::<f64>(4, 2, true, Some(0), None).unwrap();
    let s2 = sobol_sample::<f64>(4, 2, true, Some(0), None).unwrap();
    assert_eq!(s1.dim(), (4, 2));
    assert_eq!(s1, s2);
}

#[test]
fn test_lhs_one_sample_per_bin() {
    for (n, dims) in [(7, 2), (50, 4)] {
        let doe =
            lhs_sample::<f64>(n, dims, 1, Some(LhsOptimization::RandomCd), Some(9), None).unwrap();
        for col in doe.columns() {
            let mut bins: Vec<usize> = col.iter().map(|&v| (v * n as f64) as usize).collect();
            bins.sort_unstable();
            assert_eq!(bins, (0..n).collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_greedy_scenario() {
    let doe = greedy_farthest_sample::<f64>(5, 2, 50, Some(0), None).unwrap();
    assert_eq!(doe.dim(), (5, 2));
    let d5 = min_pairwise_distance(&doe);
    let d4 = min_pairwise_distance(&doe.slice(s![..4, ..]));
    // rows are distinct
    assert!(d5 > 0.);
    // adding the maximin point keeps the separation of the first rows
    assert!(d5 <= d4);
    for k in 3..=5 {
        let dk = min_pairwise_distance(&doe.slice(s![..k, ..]));
        let dk_1 = min_pairwise_distance(&doe.slice(s![..k - 1, ..]));
        assert!(dk <= dk_1);
    }
}

#[test]
fn test_greedy_selects_from_sobol_pool() {
    let greedy = greedy_farthest_sample::<f64>(10, 2, 50, Some(5), None).unwrap();
    let pool = sobol_sample::<f64>(500, 2, true, Some(5), None).unwrap();
    assert_abs_diff_eq!(greedy.row(0), pool.row(0));
    for row in greedy.rows() {
        assert!(pool.rows().into_iter().any(|c| c == row));
    }
}

#[test]
fn test_bounds_validation() {
    assert!(matches!(
        sobol_sample(4, 2, true, None, Some(&[(0., 1.)][..])),
        Err(DoeError::InvalidBounds(_))
    ));
    assert!(matches!(
        sobol_sample(4, 2, true, None, Some(&[(0., 1.), (5., 5.)][..])),
        Err(DoeError::InvalidBounds(_))
    ));
    assert!(matches!(
        lhs_sample(4, 2, 1, None, None, Some(&[(0., 1.), (3., 2.)][..])),
        Err(DoeError::InvalidBounds(_))
    ));
    assert!(matches!(
        greedy_farthest_sample(4, 3, 10, None, Some(&[(0., 1.), (0., 1.)][..])),
        Err(DoeError::InvalidBounds(_))
    ));
}

#[test]
fn test_invalid_arguments() {
    assert!(matches!(
        lhs_sample::<f64>(0, 2, 1, Some(LhsOptimization::RandomCd), None, None),
        Err(DoeError::InvalidArgument(_))
    ));
    assert!(matches!(
        greedy_farthest_sample::<f64>(10, 2, 0, None, None),
        Err(DoeError::InvalidArgument(_))
    ));
    assert!(matches!(
        sobol_sample::<f64>(0, 2, true, None, None),
        Err(DoeError::InvalidArgument(_))
    ));
    assert!(matches!(
        sobol_sample::<f64>(4, 0, true, None, None),
        Err(DoeError::InvalidArgument(_))
    ));
    assert!(matches!(
        lhs_sample::<f64>(10, 2, 2, None, None, None),
        Err(DoeError::InvalidArgument(_))
    ));
}
