//! Latin Hypercube designs, optionally orthogonal array based and optimized.
use crate::bounds::Bounds;
use crate::discrepancy::{centered_discrepancy, rows_contribution};
use crate::errors::{DoeError, Result};
use crate::utils::rng_from_seed;
use crate::SamplingMethod;
use linfa::{Float, ParamGuard};
use ndarray::Array2;
use ndarray_rand::rand::{seq::SliceRandom, Rng};
use rand_xoshiro::Xoshiro256Plus;
use std::str::FromStr;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Maximum number of swap proposals of the random-cd optimization
pub const RANDOM_CD_MAX_ITERS: usize = 10_000;
/// Number of consecutive rejected proposals stopping the random-cd optimization
pub const RANDOM_CD_PATIENCE: usize = 100;

/// Strength of the Latin Hypercube design
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub enum LhsStrength {
    /// each one-dimensional projection is stratified
    #[default]
    One,
    /// orthogonal array based: every two-dimensional projection is also stratified
    /// on a `p x p` grid, requires `n = p^2` with `p` prime and `dim <= p + 1`
    ///
    /// The random-cd optimization keeps the one sample per section property
    /// but not the `p x p` stratification, disable it to keep the latter.
    Two,
    /// orthogonal array based: every three-dimensional projection is also stratified
    /// on a `p x p x p` grid, requires `n = p^3` with `p` prime and `dim <= p + 1`
    /// (see [LhsStrength::Two] about optimization)
    Three,
}

impl LhsStrength {
    fn order(self) -> u32 {
        match self {
            LhsStrength::One => 1,
            LhsStrength::Two => 2,
            LhsStrength::Three => 3,
        }
    }
}

impl TryFrom<usize> for LhsStrength {
    type Error = DoeError;

    fn try_from(strength: usize) -> Result<Self> {
        match strength {
            1 => Ok(LhsStrength::One),
            2 => Ok(LhsStrength::Two),
            3 => Ok(LhsStrength::Three),
            _ => Err(DoeError::InvalidArgument(format!(
                "strength must be 1, 2 or 3, got {strength}"
            ))),
        }
    }
}

/// Optimization applied to a Latin Hypercube design after its construction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub enum LhsOptimization {
    /// Random column-wise swaps of two samples kept only when they lower
    /// the centered discrepancy, see [RANDOM_CD_MAX_ITERS] and [RANDOM_CD_PATIENCE]
    RandomCd,
}

impl FromStr for LhsOptimization {
    type Err = DoeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "random-cd" => Ok(LhsOptimization::RandomCd),
            _ => Err(DoeError::InvalidArgument(format!(
                "unknown LHS optimization '{s}', expected 'random-cd'"
            ))),
        }
    }
}

/// The LHS design is built as follows: each dimension space is divided into ns sections
/// where ns is the number of sampling points, and one point is selected in each section.
///
/// By default the point is drawn uniformly within its section (`centered` puts it
/// at the middle) and the design is then improved with [LhsOptimization::RandomCd].
///
/// ```
/// use optiseed::{Lhs, LhsStrength, ParamGuard, SamplingMethod};
///
/// let doe = Lhs::<f64>::params(3)
///     .strength(LhsStrength::Two)
///     .seed(Some(42))
///     .check()
///     .unwrap()
///     .sample(25)
///     .unwrap();
/// assert_eq!(doe.dim(), (25, 3));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct Lhs<F: Float> {
    dim: usize,
    strength: LhsStrength,
    optimization: Option<LhsOptimization>,
    centered: bool,
    seed: Option<u64>,
    bounds: Option<Bounds<F>>,
}

/// Unchecked parameters of a [Lhs] sampler
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct LhsParams<F: Float>(Lhs<F>);

impl<F: Float> Lhs<F> {
    /// LHS parameters for `dim`-dimensional samples: strength 1, random-cd optimized,
    /// unseeded and within the unit hypercube
    pub fn params(dim: usize) -> LhsParams<F> {
        LhsParams(Lhs {
            dim,
            strength: LhsStrength::default(),
            optimization: Some(LhsOptimization::RandomCd),
            centered: false,
            seed: None,
            bounds: None,
        })
    }

    /// Strength of the design
    pub fn strength(&self) -> LhsStrength {
        self.strength
    }

    /// Optimization applied after construction
    pub fn optimization(&self) -> Option<LhsOptimization> {
        self.optimization
    }

    /// Random generator seed
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl<F: Float> LhsParams<F> {
    /// Sets the strength of the design
    pub fn strength(mut self, strength: LhsStrength) -> Self {
        self.0.strength = strength;
        self
    }

    /// Sets the optimization, `None` keeps the constructed design as is
    pub fn optimization(mut self, optimization: Option<LhsOptimization>) -> Self {
        self.0.optimization = optimization;
        self
    }

    /// Whether samples are put at the middle of their sections
    pub fn centered(mut self, centered: bool) -> Self {
        self.0.centered = centered;
        self
    }

    /// Sets the random generator seed, `None` means a seed drawn from entropy
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.0.seed = seed;
        self
    }

    /// Sets the sample space, samples are within the unit hypercube otherwise
    pub fn bounds(mut self, bounds: Bounds<F>) -> Self {
        self.0.bounds = Some(bounds);
        self
    }
}

impl<F: Float> ParamGuard for LhsParams<F> {
    type Checked = Lhs<F>;
    type Error = DoeError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.dim == 0 {
            return Err(DoeError::InvalidArgument(
                "dims must be positive".to_string(),
            ));
        }
        if let Some(bounds) = &self.0.bounds {
            bounds.check_dim(self.0.dim)?;
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl<F: Float> SamplingMethod<F> for Lhs<F> {
    fn dim(&self) -> usize {
        self.dim
    }

    fn bounds(&self) -> Option<&Bounds<F>> {
        self.bounds.as_ref()
    }

    fn normalized_sample(&self, ns: usize) -> Result<Array2<F>> {
        if ns == 0 {
            return Err(DoeError::InvalidArgument("n must be positive".to_string()));
        }
        let t = self.strength.order();
        let p = if t > 1 {
            Some(self.oa_base(ns, t)?)
        } else {
            None
        };

        let mut rng = rng_from_seed(self.seed);
        let mut lhs = match p {
            Some(p) => self.oa_lhs(ns, p, t, &mut rng),
            None => self.strata_lhs(ns, &mut rng),
        };

        if let Some(LhsOptimization::RandomCd) = self.optimization {
            if ns < 2 || self.dim < 2 {
                log::debug!("Skip random-cd optimization: no swap can change the design");
            } else {
                random_cd(&mut lhs, &mut rng);
            }
        }
        Ok(lhs.mapv(F::cast))
    }
}

impl<F: Float> Lhs<F> {
    /// Returns the prime `p` such that `ns = p^t` and the design fits the
    /// `p + 1` columns of the orthogonal array
    fn oa_base(&self, ns: usize, t: u32) -> Result<usize> {
        let root = (ns as f64).powf(1. / t as f64).round() as usize;
        let p = (root.saturating_sub(1)..=root + 1)
            .find(|&p| p.checked_pow(t) == Some(ns))
            .filter(|&p| is_prime(p))
            .ok_or_else(|| {
                DoeError::InvalidArgument(format!(
                    "LHS of strength {t} requires n to be p^{t} with p prime, got n = {ns}"
                ))
            })?;
        if self.dim > p + 1 {
            return Err(DoeError::InvalidArgument(format!(
                "LHS of strength {t} with n = {p}^{t} supports at most {} dimensions, got {}",
                p + 1,
                self.dim
            )));
        }
        Ok(p)
    }

    fn stratum_offset(&self, rng: &mut Xoshiro256Plus) -> f64 {
        if self.centered {
            0.5
        } else {
            rng.gen::<f64>()
        }
    }

    /// One sample per section: the sections of each column are randomly permuted
    fn strata_lhs(&self, ns: usize, rng: &mut Xoshiro256Plus) -> Array2<f64> {
        let nf = ns as f64;
        let mut lhs = Array2::zeros((ns, self.dim));
        let mut strata: Vec<usize> = (0..ns).collect();
        for mut col in lhs.columns_mut() {
            strata.shuffle(rng);
            for (x, &s) in col.iter_mut().zip(&strata) {
                *x = (s as f64 + self.stratum_offset(rng)) / nf;
            }
        }
        lhs
    }

    /// Orthogonal array based LHS: levels of the Bush orthogonal array are randomly
    /// relabelled per column, then the `p^(t-1)` rows sharing a level are spread
    /// over the sections of that level.
    fn oa_lhs(&self, ns: usize, p: usize, t: u32, rng: &mut Xoshiro256Plus) -> Array2<f64> {
        let nf = ns as f64;
        let block = ns / p;
        let mut lhs = Array2::zeros((ns, self.dim));
        let mut relabel: Vec<usize> = (0..p).collect();
        let mut strata: Vec<usize> = (0..block).collect();
        for (j, mut col) in lhs.columns_mut().into_iter().enumerate() {
            relabel.shuffle(rng);
            let levels: Vec<usize> = (0..ns)
                .map(|r| relabel[bush_level(r, j, p, t)])
                .collect();
            for level in 0..p {
                strata.shuffle(rng);
                let rows = levels
                    .iter()
                    .enumerate()
                    .filter(|&(_, &l)| l == level)
                    .map(|(r, _)| r);
                for (r, &s) in rows.zip(&strata) {
                    col[r] = ((level * block + s) as f64 + self.stratum_offset(rng)) / nf;
                }
            }
        }
        lhs
    }
}

/// Level of `row` in column `col` of the Bush orthogonal array OA(p^t, p + 1, p, t).
///
/// Rows enumerate the polynomials of degree < t over GF(p) (base-p digits are the
/// coefficients), column `x < p` evaluates them at `x`, column `p` is the leading coefficient.
fn bush_level(row: usize, col: usize, p: usize, t: u32) -> usize {
    let coef = |k: u32| (row / p.pow(k)) % p;
    if col == p {
        return coef(t - 1);
    }
    (0..t).rev().fold(0, |acc, k| (acc * col + coef(k)) % p)
}

fn is_prime(p: usize) -> bool {
    p >= 2 && (2..).take_while(|d| d * d <= p).all(|d| p % d != 0)
}

/// Random column-wise swaps between two samples, kept when they strictly lower
/// the centered discrepancy. Stops after [RANDOM_CD_MAX_ITERS] proposals or
/// [RANDOM_CD_PATIENCE] consecutive rejected ones.
fn random_cd(lhs: &mut Array2<f64>, rng: &mut Xoshiro256Plus) {
    let (ns, nx) = lhs.dim();
    let initial = centered_discrepancy(lhs);
    let mut disc = initial;
    let mut n_nochange = 0;
    let mut n_iters = 0;
    while n_iters < RANDOM_CD_MAX_ITERS && n_nochange < RANDOM_CD_PATIENCE {
        n_iters += 1;
        let k = rng.gen_range(0..nx);
        let i1 = rng.gen_range(0..ns);
        let mut i2 = rng.gen_range(0..ns);
        while i2 == i1 {
            i2 = rng.gen_range(0..ns);
        }

        let before = rows_contribution(lhs, i1, i2);
        lhs.swap([i1, k], [i2, k]);
        let delta = rows_contribution(lhs, i1, i2) - before;
        if delta < 0. {
            disc += delta;
            n_nochange = 0;
        } else {
            lhs.swap([i1, k], [i2, k]);
            n_nochange += 1;
        }
    }
    log::debug!("random-cd: discrepancy {initial} -> {disc} after {n_iters} proposals");
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne};
    use ndarray::Array2;
    use std::collections::HashSet;

    fn lhs(dim: usize) -> LhsParams<f64> {
        Lhs::params(dim)
    }

    fn assert_latin(doe: &Array2<f64>) {
        let ns = doe.nrows();
        for col in doe.columns() {
            let mut cells: Vec<usize> = col.iter().map(|&v| (v * ns as f64) as usize).collect();
            cells.sort_unstable();
            assert_eq!(cells, (0..ns).collect::<Vec<_>>());
        }
    }

    fn assert_oa_strength(doe: &Array2<f64>, p: usize, t: usize) {
        let coarse = doe.mapv(|v| (v * p as f64) as usize);
        let dim = doe.ncols();
        let mut cols: Vec<usize> = (0..t).collect();
        loop {
            let cells: HashSet<Vec<usize>> = coarse
                .rows()
                .into_iter()
                .map(|row| cols.iter().map(|&c| row[c]).collect())
                .collect();
            assert_eq!(cells.len(), p.pow(t as u32), "columns {cols:?}");
            // next combination of t columns among dim
            let Some(i) = (0..t).rev().find(|&i| cols[i] < dim - t + i) else {
                break;
            };
            cols[i] += 1;
            for j in i + 1..t {
                cols[j] = cols[j - 1] + 1;
            }
        }
    }

    #[test]
    fn test_lhs_stratified() {
        for (ns, dim) in [(1, 1), (5, 2), (10, 3), (37, 5)] {
            let doe = lhs(dim)
                .optimization(None)
                .seed(Some(42))
                .check()
                .unwrap()
                .sample(ns)
                .unwrap();
            assert_eq!(doe.dim(), (ns, dim));
            assert_latin(&doe);
        }
    }

    #[test]
    fn test_optimized_lhs_stratified() {
        let doe = lhs(4).seed(Some(0)).check().unwrap().sample(30).unwrap();
        assert_latin(&doe);
    }

    #[test]
    fn test_centered_lhs() {
        let doe = lhs(2)
            .centered(true)
            .optimization(None)
            .seed(Some(0))
            .check()
            .unwrap()
            .sample(5)
            .unwrap();
        assert_latin(&doe);
        let mut col: Vec<f64> = doe.column(0).to_vec();
        col.sort_by(|a, b| a.total_cmp(b));
        assert_abs_diff_eq!(
            Array2::from_shape_vec((1, 5), col).unwrap(),
            ndarray::array![[0.1, 0.3, 0.5, 0.7, 0.9]],
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_lhs_reproducible() {
        let sampler = lhs(3).seed(Some(7)).check().unwrap();
        let s1 = sampler.sample(20).unwrap();
        let s2 = sampler.sample(20).unwrap();
        assert_eq!(s1, s2);
        let s3 = lhs(3).seed(Some(8)).check().unwrap().sample(20).unwrap();
        assert_abs_diff_ne!(s1, s3);
    }

    #[test]
    fn test_random_cd_improves_discrepancy() {
        let base = lhs(3)
            .optimization(None)
            .seed(Some(42))
            .check()
            .unwrap()
            .sample(20)
            .unwrap();
        let optimized = lhs(3).seed(Some(42)).check().unwrap().sample(20).unwrap();
        assert!(centered_discrepancy(&optimized) < centered_discrepancy(&base));

        // optimization only permutes values within columns
        for (c_base, c_opt) in base.columns().into_iter().zip(optimized.columns()) {
            let mut a = c_base.to_vec();
            let mut b = c_opt.to_vec();
            a.sort_by(|x, y| x.total_cmp(y));
            b.sort_by(|x, y| x.total_cmp(y));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_random_cd_single_dimension() {
        let base = lhs(1).optimization(None).seed(Some(3)).check().unwrap();
        let optimized = lhs(1).seed(Some(3)).check().unwrap();
        assert_eq!(base.sample(8).unwrap(), optimized.sample(8).unwrap());
    }

    #[test]
    fn test_bush_level() {
        // OA(9, 4, 3, 2): any two columns hold each pair of levels once
        let oa: Vec<Vec<usize>> = (0..9)
            .map(|r| (0..4).map(|c| bush_level(r, c, 3, 2)).collect())
            .collect();
        for c1 in 0..4 {
            for c2 in c1 + 1..4 {
                let pairs: HashSet<_> = oa.iter().map(|row| (row[c1], row[c2])).collect();
                assert_eq!(pairs.len(), 9);
            }
        }
    }

    #[test]
    fn test_lhs_strength_2() {
        for (ns, p, dim) in [(4, 2, 3), (9, 3, 4), (25, 5, 3), (49, 7, 8)] {
            let doe = lhs(dim)
                .strength(LhsStrength::Two)
                .optimization(None)
                .seed(Some(1))
                .check()
                .unwrap()
                .sample(ns)
                .unwrap();
            assert_latin(&doe);
            assert_oa_strength(&doe, p, 2);
        }
    }

    #[test]
    fn test_lhs_strength_3() {
        for (ns, p, dim) in [(8, 2, 3), (27, 3, 4), (125, 5, 6)] {
            let doe = lhs(dim)
                .strength(LhsStrength::Three)
                .optimization(None)
                .seed(Some(1))
                .check()
                .unwrap()
                .sample(ns)
                .unwrap();
            assert_latin(&doe);
            assert_oa_strength(&doe, p, 3);
        }
    }

    #[test]
    fn test_lhs_strength_optimized() {
        let (ns, p, t) = (25, 5, 2);
        let base = lhs(3)
            .strength(LhsStrength::Two)
            .optimization(None)
            .seed(Some(1))
            .check()
            .unwrap();
        let optimized = lhs(3)
            .strength(LhsStrength::Two)
            .seed(Some(1))
            .check()
            .unwrap();

        let mut rng = rng_from_seed(Some(1));
        let mut expected = base.oa_lhs(ns, p, t, &mut rng);
        random_cd(&mut expected, &mut rng);
        let doe = optimized.sample(ns).unwrap();
        assert_eq!(doe, expected);

        let base = base.sample(ns).unwrap();
        assert_latin(&doe);
        assert!(centered_discrepancy(&doe) <= centered_discrepancy(&base));
        for (c_base, c_opt) in base.columns().into_iter().zip(doe.columns()) {
            let mut a = c_base.to_vec();
            let mut b = c_opt.to_vec();
            a.sort_by(|x, y| x.total_cmp(y));
            b.sort_by(|x, y| x.total_cmp(y));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_lhs_with_bounds() {
        let bounds = Bounds::from_pairs(&[(5., 10.), (0., 1.)]).unwrap();
        let doe = lhs(2)
            .bounds(bounds)
            .seed(Some(42))
            .check()
            .unwrap()
            .sample(10)
            .unwrap();
        assert!(doe.column(0).iter().all(|v| (5. ..=10.).contains(v)));
        assert!(doe.column(1).iter().all(|v| (0. ..=1.).contains(v)));
        let normalized = (doe - ndarray::array![[5., 0.]]) / ndarray::array![[5., 1.]];
        assert_latin(&normalized);
    }

    #[test]
    fn test_lhs_invalid_arguments() {
        assert!(matches!(
            lhs(0).check(),
            Err(DoeError::InvalidArgument(_))
        ));
        let sampler = lhs(2).check().unwrap();
        assert!(matches!(
            sampler.sample(0),
            Err(DoeError::InvalidArgument(_))
        ));
        let strength2 = lhs(2).strength(LhsStrength::Two).check().unwrap();
        // not a square
        assert!(matches!(
            strength2.sample(10),
            Err(DoeError::InvalidArgument(_))
        ));
        // square of a non prime
        assert!(matches!(
            strength2.sample(16),
            Err(DoeError::InvalidArgument(_))
        ));
        // too many dimensions for p = 2
        let wide = lhs(4).strength(LhsStrength::Two).check().unwrap();
        assert!(matches!(wide.sample(4), Err(DoeError::InvalidArgument(_))));
        let strength3 = lhs(2).strength(LhsStrength::Three).check().unwrap();
        assert!(matches!(
            strength3.sample(9),
            Err(DoeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_lhs_options_parsing() {
        assert_eq!(LhsStrength::try_from(2).unwrap(), LhsStrength::Two);
        assert!(matches!(
            LhsStrength::try_from(4),
            Err(DoeError::InvalidArgument(_))
        ));
        assert!(matches!(
            LhsStrength::try_from(0),
            Err(DoeError::InvalidArgument(_))
        ));
        assert_eq!(
            "random-cd".parse::<LhsOptimization>().unwrap(),
            LhsOptimization::RandomCd
        );
        assert!("maximin".parse::<LhsOptimization>().is_err());
    }
}
