//! Greedy farthest point (maximin) selection among Sobol candidates.
use crate::bounds::Bounds;
use crate::errors::{DoeError, Result};
use crate::sobol::Sobol;
use crate::utils::l2_dist;
use crate::SamplingMethod;
use linfa::{Float, ParamGuard};
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix2};

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Default ratio between the candidate pool size and the number of samples
pub const DEFAULT_CANDIDATE_MULTIPLIER: usize = 50;

/// Greedy farthest point design: samples are selected one by one from a scrambled
/// Sobol candidate pool, each new sample being the candidate farthest from the
/// already selected ones (maximin).
///
/// The candidate pool holds `max(ns * candidate_multiplier, ns + 1)` points of the
/// sample space: memory grows as `O(ns * candidate_multiplier * nx)` and time as
/// `O(ns^2 * candidate_multiplier * nx)`.
///
/// When bounds are given, candidates are scaled before distances are computed
/// so that selection reflects the geometry of the actual sample space.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct GreedyFarthest<F: Float> {
    dim: usize,
    candidate_multiplier: usize,
    seed: Option<u64>,
    bounds: Option<Bounds<F>>,
}

/// Unchecked parameters of a [GreedyFarthest] sampler
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct GreedyFarthestParams<F: Float>(GreedyFarthest<F>);

impl<F: Float> GreedyFarthest<F> {
    /// Greedy farthest point parameters for `dim`-dimensional samples with
    /// [DEFAULT_CANDIDATE_MULTIPLIER], unseeded and within the unit hypercube
    pub fn params(dim: usize) -> GreedyFarthestParams<F> {
        GreedyFarthestParams(GreedyFarthest {
            dim,
            candidate_multiplier: DEFAULT_CANDIDATE_MULTIPLIER,
            seed: None,
            bounds: None,
        })
    }

    /// Ratio between the candidate pool size and the number of samples
    pub fn candidate_multiplier(&self) -> usize {
        self.candidate_multiplier
    }

    /// Seed of the candidate pool generation
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Scrambled Sobol candidates within the sample space
    fn candidates(&self, ns: usize) -> Result<Array2<F>> {
        let pool_size = ns
            .checked_mul(self.candidate_multiplier)
            .ok_or_else(|| {
                DoeError::InvalidArgument(format!(
                    "candidate pool of {ns} x {} points is too large",
                    self.candidate_multiplier
                ))
            })?
            .max(ns + 1);
        log::debug!("Greedy farthest point: {pool_size} candidates for {ns} samples");
        let sobol = Sobol::params(self.dim).scramble(true).seed(self.seed);
        let sobol = match &self.bounds {
            Some(bounds) => sobol.bounds(bounds.clone()),
            None => sobol,
        };
        sobol.check()?.sample(pool_size)
    }
}

impl<F: Float> GreedyFarthestParams<F> {
    /// Sets the ratio between the candidate pool size and the number of samples
    pub fn candidate_multiplier(mut self, candidate_multiplier: usize) -> Self {
        self.0.candidate_multiplier = candidate_multiplier;
        self
    }

    /// Sets the candidate pool seed, `None` means a seed drawn from entropy
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

impl<F: Float> ParamGuard for GreedyFarthestParams<F> {
    type Checked = GreedyFarthest<F>;
    type Error = DoeError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.dim == 0 {
            return Err(DoeError::InvalidArgument(
                "dims must be positive".to_string(),
            ));
        }
        if self.0.candidate_multiplier == 0 {
            return Err(DoeError::InvalidArgument(
                "candidate_multiplier must be positive".to_string(),
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

impl<F: Float> SamplingMethod<F> for GreedyFarthest<F> {
    fn dim(&self) -> usize {
        self.dim
    }

    fn bounds(&self) -> Option<&Bounds<F>> {
        self.bounds.as_ref()
    }

    fn normalized_sample(&self, ns: usize) -> Result<Array2<F>> {
        match &self.bounds {
            // selection in the scaled space, then mapped back to the unit hypercube
            Some(bounds) => {
                let doe = self.sample(ns)?;
                let lower = bounds.lower();
                let extent = &bounds.upper() - &lower;
                Ok(((doe - lower) / extent).mapv(|v| v.max(F::zero()).min(F::one())))
            }
            None => self.sample(ns),
        }
    }

    fn sample(&self, ns: usize) -> Result<Array2<F>> {
        if ns == 0 {
            return Err(DoeError::InvalidArgument("n must be positive".to_string()));
        }
        let candidates = self.candidates(ns)?;
        let (doe, _) = maximin_select(&candidates, ns)?;
        Ok(doe)
    }
}

/// Selects `ns` rows of `candidates` with the greedy maximin heuristic.
///
/// The first candidate is selected first, then each step selects the remaining
/// candidate whose distance to the selected set is the largest, ties going to the
/// lowest candidate index.
///
/// Returns the selected rows in selection order together with the distance of each
/// of them to the rows selected before (`+inf` for the first one). These distances
/// are non-increasing, and the smallest pairwise distance among the first `k`
/// rows is the `k`-th distance.
pub fn maximin_select<F: Float>(
    candidates: &ArrayBase<impl Data<Elem = F>, Ix2>,
    ns: usize,
) -> Result<(Array2<F>, Array1<F>)> {
    if ns == 0 {
        return Err(DoeError::InvalidArgument("n must be positive".to_string()));
    }
    let nc = candidates.nrows();
    if nc < ns {
        return Err(DoeError::InsufficientCandidates {
            requested: ns,
            available: nc,
        });
    }

    let mut selected = Vec::with_capacity(ns);
    let mut distances = Vec::with_capacity(ns);
    let mut taken = vec![false; nc];
    // distance of each candidate to the selected set
    let mut min_dists = vec![F::infinity(); nc];

    let mut current = 0;
    let mut current_dist = F::infinity();
    loop {
        selected.push(current);
        distances.push(current_dist);
        taken[current] = true;
        if selected.len() == ns {
            break;
        }

        let newest = candidates.row(current);
        let mut best: Option<(usize, F)> = None;
        for (j, row) in candidates.outer_iter().enumerate() {
            if taken[j] {
                continue;
            }
            let d = min_dists[j].min(l2_dist(&row, &newest));
            min_dists[j] = d;
            if best.map_or(true, |(_, best_d)| d > best_d) {
                best = Some((j, d));
            }
        }
        // nc >= ns ensures a remaining candidate
        let Some((j, d)) = best else {
            break;
        };
        current = j;
        current_dist = d;
    }

    Ok((
        candidates.select(Axis(0), &selected),
        Array1::from_vec(distances),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::min_pairwise_distance;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, s};
    use std::collections::HashSet;

    fn greedy(dim: usize) -> GreedyFarthestParams<f64> {
        GreedyFarthest::params(dim)
    }

    #[test]
    fn test_maximin_select() {
        let candidates = array![[0.5], [0.0], [1.0], [0.25], [0.75]];
        let (doe, dists) = maximin_select(&candidates, 3).unwrap();
        // 0.0 and 1.0 are both at 0.5 from 0.5: lowest index first
        assert_eq!(doe, array![[0.5], [0.0], [1.0]]);
        assert_eq!(dists[0], f64::INFINITY);
        assert_abs_diff_eq!(dists.slice(s![1..]), array![0.5, 0.5]);

        let (doe, dists) = maximin_select(&candidates, 5).unwrap();
        assert_eq!(doe, array![[0.5], [0.0], [1.0], [0.25], [0.75]]);
        assert_abs_diff_eq!(dists.slice(s![1..]), array![0.5, 0.5, 0.25, 0.25]);
    }

    #[test]
    fn test_maximin_select_insufficient() {
        let candidates = array![[0.5, 0.5], [0., 0.]];
        assert_eq!(
            maximin_select(&candidates, 3).unwrap_err(),
            DoeError::InsufficientCandidates {
                requested: 3,
                available: 2
            }
        );
        assert!(matches!(
            maximin_select(&candidates, 0),
            Err(DoeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_greedy_farthest() {
        let doe = greedy(2)
            .seed(Some(0))
            .check()
            .unwrap()
            .sample(5)
            .unwrap();
        assert_eq!(doe.dim(), (5, 2));
        assert!(doe.iter().all(|v| (0. ..=1.).contains(v)));
        let rows: HashSet<Vec<u64>> = doe
            .rows()
            .into_iter()
            .map(|r| r.iter().map(|v| v.to_bits()).collect())
            .collect();
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn test_greedy_starts_with_first_candidate() {
        let doe = greedy(3).seed(Some(11)).check().unwrap().sample(4).unwrap();
        let sobol = Sobol::<f64>::params(3)
            .seed(Some(11))
            .check()
            .unwrap()
            .sample(1)
            .unwrap();
        assert_eq!(doe.row(0), sobol.row(0));
    }

    #[test]
    fn test_greedy_maximin_distances() {
        let sampler = greedy(3)
            .candidate_multiplier(20)
            .seed(Some(4))
            .check()
            .unwrap();
        let candidates = sampler.candidates(12).unwrap();
        let (doe, dists) = maximin_select(&candidates, 12).unwrap();
        assert_eq!(doe, sampler.sample(12).unwrap());
        for k in 2..=12 {
            assert!(dists[k - 1] <= dists[k - 2]);
            assert_abs_diff_eq!(
                min_pairwise_distance(&doe.slice(s![..k, ..])),
                dists[k - 1],
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_greedy_reproducible() {
        let sampler = greedy(2).seed(Some(0)).check().unwrap();
        assert_eq!(sampler.sample(10).unwrap(), sampler.sample(10).unwrap());
    }

    #[test]
    fn test_greedy_with_bounds() {
        let bounds = Bounds::from_pairs(&[(0., 100.), (0., 1.)]).unwrap();
        let sampler = greedy(2)
            .candidate_multiplier(10)
            .seed(Some(2))
            .bounds(bounds.clone())
            .check()
            .unwrap();
        let doe = sampler.sample(8).unwrap();
        assert!(doe.column(0).iter().all(|v| (0. ..=100.).contains(v)));
        assert!(doe.column(1).iter().all(|v| (0. ..=1.).contains(v)));

        // selection happens on scaled candidates
        let candidates = Sobol::<f64>::params(2)
            .seed(Some(2))
            .check()
            .unwrap()
            .sample(80)
            .unwrap();
        let (expected, _) = maximin_select(&bounds.scale(&candidates).unwrap(), 8).unwrap();
        assert_eq!(doe, expected);

        let normalized = sampler.normalized_sample(8).unwrap();
        assert!(normalized.iter().all(|v| (0. ..=1.).contains(v)));
        assert_abs_diff_eq!(bounds.scale(&normalized).unwrap(), doe, epsilon = 1e-9);
    }

    #[test]
    fn test_greedy_small_multiplier() {
        // pool holds at least ns + 1 candidates
        let doe = greedy(2)
            .candidate_multiplier(1)
            .seed(Some(0))
            .check()
            .unwrap()
            .sample(6)
            .unwrap();
        assert_eq!(doe.dim(), (6, 2));
    }

    #[test]
    fn test_greedy_invalid_arguments() {
        assert!(matches!(
            greedy(0).check(),
            Err(DoeError::InvalidArgument(_))
        ));
        assert!(matches!(
            greedy(2).candidate_multiplier(0).check(),
            Err(DoeError::InvalidArgument(_))
        ));
        let sampler = greedy(2).check().unwrap();
        assert!(matches!(
            sampler.sample(0),
            Err(DoeError::InvalidArgument(_))
        ));
        let bounds = Bounds::from_pairs(&[(0., 1.)]).unwrap();
        assert!(matches!(
            greedy(2).bounds(bounds).check(),
            Err(DoeError::InvalidBounds(_))
        ));
    }
}
