//! Conversion of covariance matrices to correlation matrices.
//!
//! Retrieval error covariance matrices are over the combined temperature/moisture state vector, so
//! the helpers here also know how to pull the temperature and moisture blocks back out of the
//! combined matrix.

use crate::error::{AnalysisError, Result};
use itertools::Itertools;
use ndarray::{s, Array2, ArrayView2, Axis};

/// Convert a covariance matrix into a correlation matrix.
///
/// Each entry `(i, j)` of the result is `a[i, j] / (sqrt(a[i, i]) * sqrt(a[j, j]))`.
///
/// A zero (or negative) variance on the diagonal is not treated as an error, the corresponding
/// rows and columns of the result will hold non-finite values. Callers that need to guard against
/// that should check the output or use [`cov2corr_strict`].
pub fn cov2corr(a: &Array2<f64>) -> Result<Array2<f64>> {
    check_square(a)?;

    let std_dev = a.diag().mapv(f64::sqrt);

    let num_degenerate = std_dev.iter().filter(|&&d| !(d > 0.0 && d.is_finite())).count();
    if num_degenerate > 0 {
        log::warn!(
            "{} degenerate variance(s) on the covariance diagonal, correlations will not be finite",
            num_degenerate
        );
    }

    let mut corr = a.to_owned();
    for ((i, j), val) in corr.indexed_iter_mut() {
        *val = *val / std_dev[i] / std_dev[j];
    }

    Ok(corr)
}

/// Convert a covariance matrix into a correlation matrix, rejecting degenerate variances.
///
/// Same as [`cov2corr`], but any diagonal entry that is zero, negative, or not finite causes an
/// `AnalysisError::DegenerateVariance` naming the first such index.
pub fn cov2corr_strict(a: &Array2<f64>) -> Result<Array2<f64>> {
    check_square(a)?;

    if let Some((index, _)) = a
        .diag()
        .iter()
        .find_position(|&&var| !(var > 0.0 && var.is_finite()))
    {
        return Err(AnalysisError::DegenerateVariance { index });
    }

    cov2corr(a)
}

fn check_square(a: &Array2<f64>) -> Result<()> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(AnalysisError::shape_mismatch(
            "square matrix",
            format!("{} x {}", rows, cols),
        ));
    }
    Ok(())
}

/// The temperature and moisture blocks of a matrix over the combined state vector.
#[derive(Debug, Clone)]
pub struct CorrelationBlocks<'a> {
    /// Entries `[0:nz, 0:nz]`.
    pub temperature: ArrayView2<'a, f64>,
    /// Entries `[nz:2nz, nz:2nz]`.
    pub moisture: ArrayView2<'a, f64>,
}

impl<'a> CorrelationBlocks<'a> {
    /// Split a combined matrix into its temperature and moisture diagonal blocks, with `nz`
    /// levels in each profile.
    ///
    /// Any rows or columns beyond `2 * nz` (trace gas, cloud properties, etc) are ignored.
    pub fn split(matrix: &'a Array2<f64>, nz: usize) -> Result<Self> {
        if nz == 0 {
            return Err(AnalysisError::NotEnoughData);
        }

        let (rows, cols) = matrix.dim();
        if rows < 2 * nz || cols < 2 * nz {
            return Err(AnalysisError::shape_mismatch(
                format!("at least {} x {}", 2 * nz, 2 * nz),
                format!("{} x {}", rows, cols),
            ));
        }

        Ok(CorrelationBlocks {
            temperature: matrix.slice(s![..nz, ..nz]),
            moisture: matrix.slice(s![nz..2 * nz, nz..2 * nz]),
        })
    }

    /// The number of levels in each block.
    pub fn num_levels(&self) -> usize {
        self.temperature.len_of(Axis(0))
    }
}
