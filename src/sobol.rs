//! Sobol low discrepancy sequence as a 32-bit digital net in base 2.
use crate::bounds::Bounds;
use crate::errors::{DoeError, Result};
use crate::utils::rng_from_seed;
use crate::SamplingMethod;
use linfa::{Float, ParamGuard};
use ndarray::{Array2, ArrayViewMut1};
use ndarray_rand::rand::Rng;

mod directions;
use directions::PRIMITIVE_POLYNOMIALS;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Number of bits of the digital net, at most `2^SOBOL_BITS` points can be drawn
pub const SOBOL_BITS: usize = 32;

/// Number of dimensions supported by the direction numbers table
pub const MAX_SOBOL_DIM: usize = PRIMITIVE_POLYNOMIALS.len() + 1;

type DirectionNumbers = [u32; SOBOL_BITS];

/// Direction numbers `v_k = m_k / 2^k` of dimension `dim`, stored left-aligned on `SOBOL_BITS` bits
fn direction_numbers(dim: usize) -> DirectionNumbers {
    let mut v = [0u32; SOBOL_BITS];
    if dim == 0 {
        for (k, vk) in v.iter_mut().enumerate() {
            *vk = 1 << (SOBOL_BITS - 1 - k);
        }
        return v;
    }
    let (s, a, m) = PRIMITIVE_POLYNOMIALS[dim - 1];
    for (k, (vk, &mk)) in v.iter_mut().zip(m).enumerate() {
        *vk = mk << (SOBOL_BITS - 1 - k);
    }
    for k in s..SOBOL_BITS {
        let mut vk = v[k - s] ^ (v[k - s] >> s);
        for j in 1..s {
            if (a >> (s - 1 - j)) & 1 == 1 {
                vk ^= v[k - j];
            }
        }
        v[k] = vk;
    }
    v
}

/// Random lower triangular binary matrix with unit diagonal.
/// Row `j` acts on bit `j` counted from the most significant bit.
fn random_ltm(rng: &mut impl Rng) -> [u32; SOBOL_BITS] {
    let mut ltm = [0u32; SOBOL_BITS];
    for (j, row) in ltm.iter_mut().enumerate() {
        let diag = 1u32 << (SOBOL_BITS - 1 - j);
        let upper_bits = !((diag as u64) * 2 - 1) as u32;
        *row = (rng.gen::<u32>() & upper_bits) | diag;
    }
    ltm
}

fn ltm_apply(ltm: &[u32; SOBOL_BITS], v: u32) -> u32 {
    ltm.iter().enumerate().fold(0, |acc, (j, row)| {
        acc | (((row & v).count_ones() & 1) << (SOBOL_BITS - 1 - j))
    })
}

/// Digital net state for one sampling call: current point as integers,
/// index of the next point and direction numbers of each dimension.
#[derive(Clone, Debug)]
pub(crate) struct SobolEngine {
    directions: Vec<DirectionNumbers>,
    state: Vec<u32>,
    index: u64,
}

impl SobolEngine {
    pub(crate) fn new(dim: usize) -> Self {
        SobolEngine {
            directions: (0..dim).map(direction_numbers).collect(),
            state: vec![0; dim],
            index: 0,
        }
    }

    /// Applies a linear matrix scramble and a digital shift to each dimension.
    ///
    /// For each dimension the generator is drawn `SOBOL_BITS` times for the matrix
    /// rows then once for the shift.
    pub(crate) fn scrambled(mut self, rng: &mut impl Rng) -> Self {
        for (dirs, shift) in self.directions.iter_mut().zip(self.state.iter_mut()) {
            let ltm = random_ltm(rng);
            dirs.iter_mut().for_each(|v| *v = ltm_apply(&ltm, *v));
            *shift = rng.gen();
        }
        self
    }

    /// Writes the next point in `out` and advances the sequence.
    /// Point `i` differs from point `i - 1` by the direction numbers
    /// selected by the lowest zero bit of `i - 1` (Gray code ordering).
    fn next_into(&mut self, mut out: ArrayViewMut1<f64>) {
        if self.index > 0 {
            let c = (self.index - 1).trailing_ones() as usize;
            for (x, dirs) in self.state.iter_mut().zip(&self.directions) {
                *x ^= dirs[c];
            }
        }
        let scale = (SOBOL_BITS as f64).exp2();
        for (o, &x) in out.iter_mut().zip(&self.state) {
            *o = x as f64 / scale;
        }
        self.index += 1;
    }

    pub(crate) fn draw(&mut self, ns: usize) -> Array2<f64> {
        let mut doe = Array2::zeros((ns, self.state.len()));
        for row in doe.rows_mut() {
            self.next_into(row);
        }
        doe
    }
}

/// Sobol low discrepancy sequence, optionally scrambled.
///
/// Use [Sobol::params] to configure then [ParamGuard::check] to get a sampler.
///
/// ```
/// use optiseed::{ParamGuard, Sobol, SamplingMethod};
///
/// let doe = Sobol::<f64>::params(2).seed(Some(42)).check().unwrap().sample(8).unwrap();
/// assert_eq!(doe.dim(), (8, 2));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct Sobol<F: Float> {
    dim: usize,
    scramble: bool,
    seed: Option<u64>,
    bounds: Option<Bounds<F>>,
}

/// Unchecked parameters of a [Sobol] sampler
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct SobolParams<F: Float>(Sobol<F>);

impl<F: Float> Sobol<F> {
    /// Sobol parameters for `dim`-dimensional samples, scrambled, unseeded and
    /// within the unit hypercube
    pub fn params(dim: usize) -> SobolParams<F> {
        SobolParams(Sobol {
            dim,
            scramble: true,
            seed: None,
            bounds: None,
        })
    }

    /// Whether the sequence is scrambled
    pub fn scramble(&self) -> bool {
        self.scramble
    }

    /// Seed of the scrambling
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl<F: Float> SobolParams<F> {
    /// Enables or disables scrambling (linear matrix scramble and digital shift)
    pub fn scramble(mut self, scramble: bool) -> Self {
        self.0.scramble = scramble;
        self
    }

    /// Sets the scrambling seed, `None` means a seed drawn from entropy.
    /// Ignored when scrambling is disabled.
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

impl<F: Float> ParamGuard for SobolParams<F> {
    type Checked = Sobol<F>;
    type Error = DoeError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        let dim = self.0.dim;
        if dim == 0 {
            return Err(DoeError::InvalidArgument(
                "dims must be positive".to_string(),
            ));
        }
        if dim > MAX_SOBOL_DIM {
            return Err(DoeError::InvalidArgument(format!(
                "Sobol sequence supports at most {MAX_SOBOL_DIM} dimensions, got {dim}"
            )));
        }
        if let Some(bounds) = &self.0.bounds {
            bounds.check_dim(dim)?;
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl<F: Float> SamplingMethod<F> for Sobol<F> {
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
        if ns as u64 > 1u64 << SOBOL_BITS {
            return Err(DoeError::InvalidArgument(format!(
                "Sobol net of {SOBOL_BITS} bits cannot generate more than 2^{SOBOL_BITS} points, got {ns}"
            )));
        }
        let engine = SobolEngine::new(self.dim);
        let mut engine = if self.scramble {
            let mut rng = rng_from_seed(self.seed);
            engine.scrambled(&mut rng)
        } else {
            engine
        };
        log::debug!(
            "Sobol: {} points in dimension {} (scramble={})",
            ns,
            self.dim,
            self.scramble
        );
        Ok(engine.draw(ns).mapv(F::cast))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne};
    use ndarray::{array, Array2};
    use std::collections::HashSet;

    fn gray_fold(dirs: &[DirectionNumbers], i: u64) -> Vec<f64> {
        let gray = i ^ (i >> 1);
        dirs.iter()
            .map(|v| {
                let x = (0..SOBOL_BITS)
                    .filter(|b| (gray >> b) & 1 == 1)
                    .fold(0u32, |acc, b| acc ^ v[b]);
                x as f64 / 2f64.powi(SOBOL_BITS as i32)
            })
            .collect()
    }

    fn is_primitive(s: usize, a: u32) -> bool {
        let poly = (1u32 << s) | (a << 1) | 1;
        let period = (1u32 << s) - 1;
        let mut x = 1u32;
        for k in 1..=period {
            x <<= 1;
            if (x >> s) & 1 == 1 {
                x ^= poly;
            }
            if x == 1 {
                return k == period;
            }
        }
        false
    }

    fn assert_stratified(doe: &Array2<f64>, m: u32) {
        let ns = 1usize << m;
        for col in doe.columns() {
            let mut cells: Vec<usize> = col
                .iter()
                .take(ns)
                .map(|&v| (v * ns as f64) as usize)
                .collect();
            cells.sort_unstable();
            assert_eq!(cells, (0..ns).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_direction_numbers_table() {
        assert!(PRIMITIVE_POLYNOMIALS
            .windows(2)
            .all(|w| (w[0].0, w[0].1) < (w[1].0, w[1].1)));
        for &(s, a, m) in PRIMITIVE_POLYNOMIALS {
            assert!(is_primitive(s, a), "x^{s} with a={a} is not primitive");
            assert_eq!(m.len(), s);
            for (k, &mk) in m.iter().enumerate() {
                assert_eq!(mk % 2, 1);
                assert!(mk < 1 << (k + 1));
            }
        }
    }

    #[test]
    fn test_sobol_unscrambled() {
        let expected = array![
            [0., 0.],
            [0.5, 0.5],
            [0.75, 0.25],
            [0.25, 0.75],
            [0.375, 0.375],
            [0.875, 0.875],
            [0.625, 0.125],
            [0.125, 0.625]
        ];
        let actual = Sobol::<f64>::params(2)
            .scramble(false)
            .check()
            .unwrap()
            .sample(8)
            .unwrap();
        assert_abs_diff_eq!(expected, actual, epsilon = 1e-15);
    }

    #[test]
    fn test_sobol_unscrambled_3d() {
        let expected = array![
            [0., 0., 0.],
            [0.5, 0.5, 0.5],
            [0.75, 0.25, 0.25],
            [0.25, 0.75, 0.75]
        ];
        let actual = Sobol::<f64>::params(3)
            .scramble(false)
            .seed(Some(42))
            .check()
            .unwrap()
            .sample(4)
            .unwrap();
        assert_abs_diff_eq!(expected, actual, epsilon = 1e-15);
    }

    #[test]
    fn test_gray_code_fold() {
        let dirs: Vec<_> = (0..MAX_SOBOL_DIM).map(direction_numbers).collect();
        let mut engine = SobolEngine::new(MAX_SOBOL_DIM);
        let doe = engine.draw(100);
        for (i, row) in doe.rows().into_iter().enumerate() {
            assert_eq!(row.to_vec(), gray_fold(&dirs, i as u64));
        }
    }

    #[test]
    fn test_sobol_stratification() {
        let sobol = Sobol::<f64>::params(MAX_SOBOL_DIM).scramble(false);
        let doe = sobol.check().unwrap().sample(256).unwrap();
        for m in 0..=8 {
            assert_stratified(&doe, m);
        }
    }

    #[test]
    fn test_scrambled_stratification() {
        let sobol = Sobol::<f64>::params(MAX_SOBOL_DIM).seed(Some(7));
        let doe = sobol.check().unwrap().sample(256).unwrap();
        for m in 0..=8 {
            assert_stratified(&doe, m);
        }
    }

    #[test]
    fn test_scrambled_net_2d() {
        // the first two dimensions form a (0, m, 2)-net: every elementary
        // interval of volume 2^-m holds exactly one of the first 2^m points
        let doe = Sobol::<f64>::params(2)
            .seed(Some(3))
            .check()
            .unwrap()
            .sample(64)
            .unwrap();
        for m in 0..=6u32 {
            for a in 0..=m {
                let cells: HashSet<(usize, usize)> = doe
                    .rows()
                    .into_iter()
                    .take(1 << m)
                    .map(|p| {
                        (
                            (p[0] * (1u64 << a) as f64) as usize,
                            (p[1] * (1u64 << (m - a)) as f64) as usize,
                        )
                    })
                    .collect();
                assert_eq!(cells.len(), 1 << m);
            }
        }
    }

    #[test]
    fn test_sobol_high_dimension() {
        let doe = Sobol::<f64>::params(64)
            .seed(Some(0))
            .check()
            .unwrap()
            .sample(128)
            .unwrap();
        assert_eq!(doe.dim(), (128, 64));
        assert_stratified(&doe, 7);
    }

    #[test]
    fn test_scrambled_reproducible() {
        let sobol = Sobol::<f64>::params(5).seed(Some(0)).check().unwrap();
        let s1 = sobol.sample(16).unwrap();
        let s2 = sobol.sample(16).unwrap();
        assert_eq!(s1, s2);
        assert!(s1.iter().all(|v| (0. ..1.).contains(v)));

        let other = Sobol::<f64>::params(5)
            .seed(Some(1))
            .check()
            .unwrap()
            .sample(16)
            .unwrap();
        assert_abs_diff_ne!(s1, other);
    }

    #[test]
    fn test_sobol_with_bounds() {
        let bounds = Bounds::from_pairs(&[(5., 10.), (-1., 1.)]).unwrap();
        let doe = Sobol::<f64>::params(2)
            .scramble(false)
            .bounds(bounds)
            .check()
            .unwrap()
            .sample(4)
            .unwrap();
        let expected = array![[5., -1.], [7.5, 0.], [8.75, -0.5], [6.25, 0.5]];
        assert_abs_diff_eq!(expected, doe, epsilon = 1e-12);
    }

    #[test]
    fn test_sobol_f32() {
        let doe = Sobol::<f32>::params(2)
            .scramble(false)
            .check()
            .unwrap()
            .sample(2)
            .unwrap();
        assert_abs_diff_eq!(doe, array![[0f32, 0.], [0.5, 0.5]]);
    }

    #[test]
    fn test_sobol_invalid_arguments() {
        assert!(matches!(
            Sobol::<f64>::params(0).check(),
            Err(DoeError::InvalidArgument(_))
        ));
        assert!(matches!(
            Sobol::<f64>::params(MAX_SOBOL_DIM + 1).check(),
            Err(DoeError::InvalidArgument(_))
        ));
        let sobol = Sobol::<f64>::params(2).check().unwrap();
        assert!(matches!(
            sobol.sample(0),
            Err(DoeError::InvalidArgument(_))
        ));
        if usize::BITS > 32 {
            assert!(matches!(
                sobol.sample(((1u64 << SOBOL_BITS) + 1) as usize),
                Err(DoeError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_sobol_bounds_mismatch() {
        let bounds = Bounds::from_pairs(&[(0., 1.)]).unwrap();
        assert!(matches!(
            Sobol::<f64>::params(2).bounds(bounds).check(),
            Err(DoeError::InvalidBounds(_))
        ));
    }
}
