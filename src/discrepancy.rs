//! Centered L2 discrepancy (Hickernell) of a design in the unit hypercube.
//!
//! The squared criterion is
//! `CD² = (13/12)^d - 2/n Σ_i Π_k a(x_ik) + 1/n² Σ_i Σ_j Π_k b(x_ik, x_jk)`
//! with `a(x) = 1 + |x - 1/2|/2 - (x - 1/2)²/2` and
//! `b(x, y) = 1 + |x - 1/2|/2 + |y - 1/2|/2 - |x - y|/2`.
use linfa::Float;
use ndarray::{ArrayBase, ArrayView1, Data, Ix2};

fn single_term(x: ArrayView1<f64>) -> f64 {
    x.iter()
        .map(|&v| {
            let z = (v - 0.5).abs();
            1. + 0.5 * z - 0.5 * z * z
        })
        .product()
}

fn pair_term(xi: ArrayView1<f64>, xj: ArrayView1<f64>) -> f64 {
    xi.iter()
        .zip(xj.iter())
        .map(|(&a, &b)| {
            1. + 0.5 * (a - 0.5).abs() + 0.5 * (b - 0.5).abs() - 0.5 * (a - b).abs()
        })
        .product()
}

/// Squared centered L2 discrepancy of the (n, d) design `x` whose samples belong to `[0., 1.]^d`.
///
/// The lower, the more uniform. An empty design has a null discrepancy.
pub fn centered_discrepancy<F: Float>(x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> F {
    let x = x.mapv(|v| v.to_f64().unwrap_or(f64::NAN));
    let (n, d) = x.dim();
    if n == 0 {
        return F::zero();
    }
    let nf = n as f64;
    let singles: f64 = x.rows().into_iter().map(single_term).sum();
    let mut pairs = 0.;
    for i in 0..n {
        for j in 0..n {
            pairs += pair_term(x.row(i), x.row(j));
        }
    }
    F::cast((13f64 / 12.).powi(d as i32) - 2. / nf * singles + pairs / (nf * nf))
}

/// Part of the squared centered discrepancy of `x` depending on rows `i1` and `i2`.
///
/// Swapping two values of a column between rows `i1` and `i2` only changes
/// this part, so the discrepancy variation of such a swap is the difference
/// of this quantity after and before the swap, in `O(n d)`.
pub(crate) fn rows_contribution(
    x: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    i1: usize,
    i2: usize,
) -> f64 {
    let nf = x.nrows() as f64;
    let (r1, r2) = (x.row(i1), x.row(i2));
    let mut cross = 0.;
    for (j, row) in x.rows().into_iter().enumerate() {
        if j != i1 && j != i2 {
            cross += pair_term(r1, row) + pair_term(r2, row);
        }
    }
    let diagonal = pair_term(r1, r1) + pair_term(r2, r2) + 2. * pair_term(r1, r2);
    -2. / nf * (single_term(r1) + single_term(r2)) + (2. * cross + diagonal) / (nf * nf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array2};
    use ndarray_rand::rand::{Rng, SeedableRng};
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn test_centered_discrepancy() {
        let space = array![[1., 3.], [2., 6.], [3., 2.], [4., 5.], [5., 1.], [6., 4.]];
        let x = (space - 0.5) / 6.;
        assert_abs_diff_eq!(centered_discrepancy(&x), 0.008142039609053464, epsilon = 1e-14);
    }

    #[test]
    fn test_centered_discrepancy_single_point() {
        assert_abs_diff_eq!(centered_discrepancy(&array![[0.5]]), 1. / 12., epsilon = 1e-14);
        assert_abs_diff_eq!(
            centered_discrepancy(&array![[0.25, 0.25], [0.75, 0.75]]),
            0.06228298611111094,
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_centered_discrepancy_dimension() {
        // a single point at the center: (13/12)^d - 2 + 1
        for d in 1..=6 {
            let x = Array2::from_elem((1, d), 0.5);
            let expected = (13f64 / 12.).powi(d as i32) - 1.;
            assert_abs_diff_eq!(centered_discrepancy(&x), expected, epsilon = 1e-14);
        }
        let x32 = Array2::from_elem((1, 3), 0.5f32);
        assert_abs_diff_eq!(
            centered_discrepancy(&x32),
            (13f32 / 12.).powi(3) - 1.,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_rows_contribution_swap() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let mut x = Array2::random_using((10, 3), Uniform::new(0., 1.), &mut rng);
        let mut disc = centered_discrepancy(&x);
        for _ in 0..20 {
            let k = rng.gen_range(0..3);
            let i1 = rng.gen_range(0..10);
            let i2 = (i1 + rng.gen_range(1..10)) % 10;
            let before = rows_contribution(&x, i1, i2);
            x.swap([i1, k], [i2, k]);
            disc += rows_contribution(&x, i1, i2) - before;
            assert_abs_diff_eq!(disc, centered_discrepancy(&x), epsilon = 1e-12);
        }
    }
}
