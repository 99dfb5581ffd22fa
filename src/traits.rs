use crate::bounds::Bounds;
use crate::errors::Result;
use linfa::Float;
use ndarray::Array2;

/// Sampling method allowing to generate a DoE in a given sample space
pub trait SamplingMethod<F: Float> {
    /// Returns the dimension of a sample
    fn dim(&self) -> usize;

    /// Returns the bounds of the sample space if any,
    /// otherwise samples are generated in the unit hypercube `[0., 1.]^nx`
    fn bounds(&self) -> Option<&Bounds<F>>;

    /// Generates a (ns, nx)-shaped array of samples belonging to `[0., 1.]^nx`
    ///
    /// # Parameters
    ///
    /// * `ns`: number of samples
    ///
    /// # Returns
    ///
    /// * A (ns, nx) matrix of samples where nx is the dimension of the sample space
    ///   each sample belongs to `[0., 1.]^nx` hypercube
    fn normalized_sample(&self, ns: usize) -> Result<Array2<F>>;

    /// Generates a (ns, nx)-shaped array of samples belonging to `[lower_bound_xi, upper_bound_xi]^nx`
    ///
    /// # Parameters
    ///
    /// * `ns`: number of samples
    ///
    /// # Returns
    ///
    /// * A (ns, nx) matrix where nx is the dimension of the sample space.
    ///   each sample belongs to `[lower_bound_xi, upper_bound_xi]^nx` where bounds
    ///   are defined as returned values of `bounds` function, or to `[0., 1.]^nx`
    ///   when no bounds are given.
    fn sample(&self, ns: usize) -> Result<Array2<F>> {
        let doe = self.normalized_sample(ns)?;
        match self.bounds() {
            Some(bounds) => bounds.scale(&doe),
            None => Ok(doe),
        }
    }
}
