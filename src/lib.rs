/*!
This library generates deterministic space-filling designs of experiments (DoE) a.k.a.
initial samples, within the unit hypercube `[0, 1]^nx` or within a given design space.
Such designs are used to seed optimizers, surrogate models or sampling-based searches.

A design space is defined as a list of `(lower, upper)` bounds, or as a 2D ndarray `(nx, 2)`
specifying lower bound and upper bound of each `nx` components of the samples `x`
(see [Bounds]).

Example:
```
use optiseed::{greedy_farthest_sample, lhs_sample, sobol_sample, LhsOptimization};

// Design space is defined as [5., 10.] x [0., 1.], samples are 2-dimensional.
let bounds = [(5., 10.), (0., 1.)];
// We generate eight samples using a scrambled Sobol sequence,
let samples = sobol_sample(8, 2, true, Some(42), Some(&bounds[..])).unwrap();
// or else with an optimized Latin Hypercube,
let samples = lhs_sample(8, 2, 1, Some(LhsOptimization::RandomCd), Some(42), Some(&bounds[..])).unwrap();
// or else with a greedy maximin selection among Sobol candidates.
let samples = greedy_farthest_sample(8, 2, 50, Some(42), Some(&bounds[..])).unwrap();
```

Samplers can also be configured and validated with the [ParamGuard] pattern:
```
use optiseed::{Bounds, Lhs, LhsStrength, ParamGuard, SamplingMethod};
use ndarray::arr2;

let xlimits = arr2(&[[5., 10.], [0., 1.], [-1., 1.]]);
let lhs = Lhs::params(3)
    .strength(LhsStrength::Two)
    .seed(Some(42))
    .bounds(Bounds::new(&xlimits).unwrap())
    .check()
    .unwrap();
let samples = lhs.sample(49).unwrap();
```

This library contains three kinds of sampling methods:
* [Sobol sequence](crate::sobol::Sobol), optionally scrambled,
* [Latin Hypercube Sampling](crate::lhs::Lhs), optionally orthogonal array based and
  optimized with respect to the [centered discrepancy](crate::discrepancy::centered_discrepancy),
* [Greedy farthest point sampling](crate::greedy::GreedyFarthest).

Given a seed, every method is reproducible. Each call builds and drops its own
generator state, samplers can be shared between threads.

*/
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
mod bounds;
pub mod discrepancy;
mod errors;
pub mod greedy;
pub mod lhs;
mod sampling;
pub mod sobol;
mod traits;
mod utils;

pub use bounds::*;
pub use discrepancy::centered_discrepancy;
pub use errors::*;
pub use greedy::*;
pub use lhs::*;
pub use sampling::*;
pub use sobol::*;
pub use traits::*;
pub use utils::{min_pairwise_distance, pdist};

pub use linfa::ParamGuard;
