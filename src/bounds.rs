use crate::errors::{DoeError, Result};
use linfa::Float;
use ndarray::{Array2, ArrayBase, ArrayView1, Axis, Data, Ix2, Zip};

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Validated design space: an axis-aligned box given as a (nx, 2) matrix.
///
/// The ith row is `[lower_bound, upper_bound]` of xi, the ith component of a sample x,
/// with `upper_bound > lower_bound` for every row.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct Bounds<F: Float> {
    xlimits: Array2<F>,
}

impl<F: Float> Bounds<F> {
    /// Constructor given a design space as a (nx, 2) matrix \[\[lower bound, upper bound\], ...\]
    ///
    /// ```
    /// use optiseed::Bounds;
    /// use ndarray::arr2;
    ///
    /// let bounds = Bounds::new(&arr2(&[[0.0, 1.0], [5.0, 10.0]])).unwrap();
    /// assert_eq!(bounds.dim(), 2);
    /// ```
    pub fn new(xlimits: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Result<Self> {
        if xlimits.ncols() != 2 {
            return Err(DoeError::InvalidBounds(format!(
                "xlimits must have 2 columns (lower, upper), found {}",
                xlimits.ncols()
            )));
        }
        for (i, row) in xlimits.outer_iter().enumerate() {
            if !row[0].is_finite() || !row[1].is_finite() {
                return Err(DoeError::InvalidBounds(format!(
                    "bounds must be finite for dimension {i}, found [{}, {}]",
                    row[0], row[1]
                )));
            }
            if row[1] <= row[0] {
                return Err(DoeError::InvalidBounds(format!(
                    "upper bound must be greater than lower bound for dimension {i}, found [{}, {}]",
                    row[0], row[1]
                )));
            }
        }
        Ok(Bounds {
            xlimits: xlimits.to_owned(),
        })
    }

    /// Constructor given a list of `(lower, upper)` pairs, one per dimension
    pub fn from_pairs(pairs: &[(F, F)]) -> Result<Self> {
        let mut xlimits = Array2::zeros((pairs.len(), 2));
        for (mut row, &(lower, upper)) in xlimits.outer_iter_mut().zip(pairs) {
            row[0] = lower;
            row[1] = upper;
        }
        Self::new(&xlimits)
    }

    /// Number of dimensions of the design space
    pub fn dim(&self) -> usize {
        self.xlimits.nrows()
    }

    /// The (nx, 2) matrix of the design space
    pub fn xlimits(&self) -> &Array2<F> {
        &self.xlimits
    }

    /// Lower bounds, one per dimension
    pub fn lower(&self) -> ArrayView1<F> {
        self.xlimits.column(0)
    }

    /// Upper bounds, one per dimension
    pub fn upper(&self) -> ArrayView1<F> {
        self.xlimits.column(1)
    }

    /// Fails with [DoeError::InvalidBounds] when the design space is not `dim`-dimensional
    pub fn check_dim(&self, dim: usize) -> Result<()> {
        if self.dim() != dim {
            return Err(DoeError::InvalidBounds(format!(
                "bounds length ({}) must match dims ({dim})",
                self.dim()
            )));
        }
        Ok(())
    }

    /// Maps samples from `[0., 1.]^nx` to the design space.
    ///
    /// Column `d` is transformed with `lower_d + x * (upper_d - lower_d)`.
    /// The input is left untouched, a new matrix is returned.
    pub fn scale(&self, x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Result<Array2<F>> {
        self.check_dim(x.ncols())?;
        let mut scaled = x.to_owned();
        Zip::from(scaled.axis_iter_mut(Axis(1)))
            .and(self.xlimits.outer_iter())
            .for_each(|mut col, limits| {
                let (lower, upper) = (limits[0], limits[1]);
                let extent = upper - lower;
                col.mapv_inplace(|v| (lower + v * extent).min(upper));
            });
        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{arr2, array};

    #[test]
    fn test_scale() {
        let bounds = Bounds::new(&arr2(&[[5., 10.], [-1., 1.]])).unwrap();
        let x = array![[0., 0.], [0.5, 0.25], [1., 1.]];
        let expected = array![[5., -1.], [7.5, -0.5], [10., 1.]];
        assert_abs_diff_eq!(bounds.scale(&x).unwrap(), expected, epsilon = 1e-12);
        // input is not modified
        assert_abs_diff_eq!(x[[1, 0]], 0.5);
    }

    #[test]
    fn test_from_pairs() {
        let bounds = Bounds::from_pairs(&[(0., 1.), (5., 15.)]).unwrap();
        assert_eq!(bounds.xlimits(), &arr2(&[[0., 1.], [5., 15.]]));
        assert_eq!(bounds.lower(), array![0., 5.]);
        assert_eq!(bounds.upper(), array![1., 15.]);
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(matches!(
            Bounds::from_pairs(&[(0., 1.), (5., 5.)]),
            Err(DoeError::InvalidBounds(_))
        ));
        assert!(matches!(
            Bounds::from_pairs(&[(2., 1.)]),
            Err(DoeError::InvalidBounds(_))
        ));
        assert!(matches!(
            Bounds::from_pairs(&[(0., f64::NAN)]),
            Err(DoeError::InvalidBounds(_))
        ));
        assert!(matches!(
            Bounds::from_pairs(&[(0., f64::INFINITY)]),
            Err(DoeError::InvalidBounds(_))
        ));
        assert!(matches!(
            Bounds::new(&arr2(&[[0., 1., 2.]])),
            Err(DoeError::InvalidBounds(_))
        ));
    }

    #[test]
    fn test_dim_mismatch() {
        let bounds = Bounds::from_pairs(&[(0., 1.)]).unwrap();
        assert!(matches!(
            bounds.check_dim(2),
            Err(DoeError::InvalidBounds(_))
        ));
        assert!(matches!(
            bounds.scale(&array![[0.5, 0.5]]),
            Err(DoeError::InvalidBounds(_))
        ));
    }
}
