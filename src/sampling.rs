use crate::bounds::Bounds;
use crate::errors::Result;
use crate::greedy::{GreedyFarthest, DEFAULT_CANDIDATE_MULTIPLIER};
use crate::lhs::{Lhs, LhsOptimization, LhsStrength};
use crate::sobol::Sobol;
use crate::SamplingMethod;
use linfa::{Float, ParamGuard};
use ndarray::Array2;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Available sampling methods
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub enum Sampling {
    /// Scrambled Sobol sequence
    Sobol,
    /// Random-cd optimized Latin Hypercube
    Lhs,
    /// Greedy farthest point selection among Sobol candidates
    GreedyFarthest,
}

impl Sampling {
    /// All sampling methods
    pub const ALL: [Sampling; 3] = [Sampling::Sobol, Sampling::Lhs, Sampling::GreedyFarthest];

    /// Human readable name of the method
    pub fn name(&self) -> &'static str {
        match self {
            Sampling::Sobol => "Sobol",
            Sampling::Lhs => "Latin Hypercube",
            Sampling::GreedyFarthest => "Greedy Farthest",
        }
    }
}

fn bounds_from<F: Float>(bounds: Option<&[(F, F)]>) -> Result<Option<Bounds<F>>> {
    bounds.map(Bounds::from_pairs).transpose()
}

/// Generates `n` samples of dimension `dims` with the given method and its default options
///
/// # Parameters
///
/// * `method`: sampling method
/// * `n`: number of samples
/// * `dims`: dimension of the samples
/// * `seed`: random seed, `None` means a seed drawn from entropy
/// * `bounds`: `(lower, upper)` of each dimension, unit hypercube when `None`
///
/// # Returns
///
/// * A (n, dims) matrix of samples
pub fn sampling<F: Float>(
    method: Sampling,
    n: usize,
    dims: usize,
    seed: Option<u64>,
    bounds: Option<&[(F, F)]>,
) -> Result<Array2<F>> {
    match method {
        Sampling::Sobol => sobol_sample(n, dims, true, seed, bounds),
        Sampling::Lhs => lhs_sample(
            n,
            dims,
            1,
            Some(LhsOptimization::RandomCd),
            seed,
            bounds,
        ),
        Sampling::GreedyFarthest => {
            greedy_farthest_sample(n, dims, DEFAULT_CANDIDATE_MULTIPLIER, seed, bounds)
        }
    }
}

/// Generates `n` Sobol samples of dimension `dims`
///
/// ```
/// use optiseed::sobol_sample;
///
/// let doe = sobol_sample::<f64>(4, 2, true, Some(0), None).unwrap();
/// assert_eq!(doe.dim(), (4, 2));
/// ```
pub fn sobol_sample<F: Float>(
    n: usize,
    dims: usize,
    scramble: bool,
    seed: Option<u64>,
    bounds: Option<&[(F, F)]>,
) -> Result<Array2<F>> {
    let mut params = Sobol::params(dims).scramble(scramble).seed(seed);
    if let Some(bounds) = bounds_from(bounds)? {
        params = params.bounds(bounds);
    }
    params.check()?.sample(n)
}

/// Generates `n` Latin Hypercube samples of dimension `dims`
///
/// `strength` is 1, 2 or 3, see [LhsStrength] for the constraints on `n` and `dims`.
pub fn lhs_sample<F: Float>(
    n: usize,
    dims: usize,
    strength: usize,
    optimize: Option<LhsOptimization>,
    seed: Option<u64>,
    bounds: Option<&[(F, F)]>,
) -> Result<Array2<F>> {
    let mut params = Lhs::params(dims)
        .strength(LhsStrength::try_from(strength)?)
        .optimization(optimize)
        .seed(seed);
    if let Some(bounds) = bounds_from(bounds)? {
        params = params.bounds(bounds);
    }
    params.check()?.sample(n)
}

/// Generates `n` greedy farthest point samples of dimension `dims`
/// selected among `n * candidate_multiplier` scrambled Sobol candidates
pub fn greedy_farthest_sample<F: Float>(
    n: usize,
    dims: usize,
    candidate_multiplier: usize,
    seed: Option<u64>,
    bounds: Option<&[(F, F)]>,
) -> Result<Array2<F>> {
    let mut params = GreedyFarthest::params(dims)
        .candidate_multiplier(candidate_multiplier)
        .seed(seed);
    if let Some(bounds) = bounds_from(bounds)? {
        params = params.bounds(bounds);
    }
    params.check()?.sample(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DoeError;

    #[test]
    fn test_sampling_dispatch() {
        for method in Sampling::ALL {
            let bounds = [(0., 1.), (-5., 5.)];
            let doe = sampling::<f64>(method, 9, 2, Some(3), Some(&bounds[..])).unwrap();
            assert_eq!(doe.dim(), (9, 2), "{}", method.name());
            assert!(doe.column(1).iter().all(|v| (-5. ..=5.).contains(v)));
        }
    }

    #[test]
    fn test_sampling_defaults() {
        assert_eq!(
            sampling::<f64>(Sampling::Sobol, 8, 3, Some(1), None).unwrap(),
            sobol_sample(8, 3, true, Some(1), None).unwrap()
        );
        assert_eq!(
            sampling::<f64>(Sampling::GreedyFarthest, 4, 2, Some(1), None).unwrap(),
            greedy_farthest_sample(4, 2, 50, Some(1), None).unwrap()
        );
    }

    #[test]
    fn test_invalid_strength() {
        assert!(matches!(
            lhs_sample::<f64>(4, 2, 4, None, None, None),
            Err(DoeError::InvalidArgument(_))
        ));
    }

    #[cfg(feature = "serializable")]
    #[test]
    fn test_serialized_sampler() {
        let bounds = Bounds::from_pairs(&[(0., 1.), (5., 10.)]).unwrap();
        let sampler = Lhs::<f64>::params(2)
            .seed(Some(42))
            .bounds(bounds)
            .check()
            .unwrap();
        let json = serde_json::to_string(&sampler).unwrap();
        let loaded: Lhs<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(sampler.sample(6).unwrap(), loaded.sample(6).unwrap());
    }
}
