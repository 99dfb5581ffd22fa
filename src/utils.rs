use linfa::Float;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix2};
use ndarray_rand::rand::SeedableRng;
use ndarray_stats::DeviationExt;
use rand_xoshiro::Xoshiro256Plus;

/// Creates the random generator used by one sampling call.
///
/// A given seed always gives the same stream, no seed means seeding from entropy.
pub(crate) fn rng_from_seed(seed: Option<u64>) -> Xoshiro256Plus {
    match seed {
        Some(seed) => Xoshiro256Plus::seed_from_u64(seed),
        None => Xoshiro256Plus::from_entropy(),
    }
}

/// Computes the pairwise euclidean distances between rows of a 2D-array.
///
/// Distances are ordered as (0, 1), (0, 2), ..., (0, n-1), (1, 2), ... (n-2, n-1)
pub fn pdist<F: Float>(x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Array1<F> {
    let nrows = x.nrows();
    let mut res = Vec::with_capacity(nrows * nrows.saturating_sub(1) / 2);
    for i in 0..nrows {
        for j in (i + 1)..nrows {
            res.push(l2_dist(&x.row(i), &x.row(j)));
        }
    }
    Array1::from_vec(res)
}

/// Smallest distance between two distinct rows, `+inf` when there are less than two rows
pub fn min_pairwise_distance<F: Float>(x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> F {
    pdist(x).fold(F::infinity(), |acc, &d| acc.min(d))
}

/// Euclidean distance between two points, NaN when their lengths differ
pub(crate) fn l2_dist<F: Float>(a: &ArrayView1<F>, b: &ArrayView1<F>) -> F {
    a.l2_dist(b).map(F::cast).unwrap_or_else(|_| F::nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use ndarray_rand::rand::Rng;

    #[test]
    fn test_pdist() {
        let x = array![[1., 0., 0.], [0., 1., 0.], [0., 2., 0.], [3., 4., 5.]];
        #[allow(clippy::approx_constant)]
        let expected = array![1.41421356, 2.23606798, 6.70820393, 1., 6.55743852, 6.164414];
        let actual = pdist(&x);
        assert_abs_diff_eq!(actual, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_min_pairwise_distance() {
        let x = array![[1., 0., 0.], [0., 1., 0.], [0., 2., 0.], [3., 4., 5.]];
        assert_abs_diff_eq!(min_pairwise_distance(&x), 1.);
        assert_eq!(min_pairwise_distance(&array![[0.5, 0.5]]), f64::INFINITY);
    }

    #[test]
    fn test_rng_from_seed() {
        let a: Vec<u64> = (0..4).map(|_| rng_from_seed(Some(42)).gen()).collect();
        assert!(a.iter().all(|&v| v == a[0]));
        let mut r1 = rng_from_seed(Some(1));
        let mut r2 = rng_from_seed(Some(2));
        assert_ne!(r1.gen::<u64>(), r2.gen::<u64>());
    }
}
