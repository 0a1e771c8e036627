//! Cohen's d effect sizes and residual fields.
//!
//! All functions work column-wise: rows are observations, columns are
//! domain positions, and no value is ever mixed across columns. Scalar
//! (0D) samples are treated as a single-column field.

use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};

/// Per-column mean and sum of squared deviations.
fn column_moments(y: &DMatrix<f64>) -> (Vec<f64>, Vec<f64>) {
    let n = y.nrows() as f64;
    y.column_iter()
        .map(|col| {
            let mean = col.sum() / n;
            let ss: f64 = col.iter().map(|&x| (x - mean).powi(2)).sum();
            (mean, ss)
        })
        .unzip()
}

/// One-sample Cohen's d at every domain position.
///
/// ```text
/// d = (mean(y) - mu) / std(y, ddof = 1)
/// ```
///
/// # Errors
///
/// `InsufficientObservations` if `y` has fewer than 2 rows.
pub fn d_one_sample(y: &DMatrix<f64>, mu: f64) -> Result<DVector<f64>> {
    let n = y.nrows();
    if n < 2 {
        return Err(Error::InsufficientObservations {
            required: 2,
            actual: n,
        });
    }

    let (means, ss) = column_moments(y);
    let dof = (n - 1) as f64;
    Ok(DVector::from_iterator(
        y.ncols(),
        means
            .iter()
            .zip(&ss)
            .map(|(&m, &s)| (m - mu) / (s / dof).sqrt()),
    ))
}

/// Two-sample Cohen's d with pooled variance at every domain position.
///
/// ```text
/// sp = sqrt( ((n0-1)·var(y0) + (n1-1)·var(y1)) / (n0 + n1 - 2) )
/// d  = (mean(y0) - mean(y1)) / sp
/// ```
///
/// # Errors
///
/// `ShapeMismatch` if the samples have different column counts;
/// `InsufficientObservations` if either group is empty or `n0 + n1 < 3`.
pub fn d_two_sample(y0: &DMatrix<f64>, y1: &DMatrix<f64>) -> Result<DVector<f64>> {
    if y0.ncols() != y1.ncols() {
        return Err(Error::ShapeMismatch {
            expected: y0.ncols(),
            actual: y1.ncols(),
        });
    }
    let (n0, n1) = (y0.nrows(), y1.nrows());
    if n0 == 0 || n1 == 0 || n0 + n1 < 3 {
        return Err(Error::InsufficientObservations {
            required: 3,
            actual: n0 + n1,
        });
    }

    let (m0, ss0) = column_moments(y0);
    let (m1, ss1) = column_moments(y1);
    let dof = (n0 + n1 - 2) as f64;
    Ok(DVector::from_fn(y0.ncols(), |j, _| {
        let sp = ((ss0[j] + ss1[j]) / dof).sqrt();
        (m0[j] - m1[j]) / sp
    }))
}

/// One-sample Cohen's d of a scalar sample.
pub fn d_one_sample_scalar(y: &[f64], mu: f64) -> Result<f64> {
    let y = DMatrix::from_column_slice(y.len(), 1, y);
    Ok(d_one_sample(&y, mu)?[0])
}

/// Two-sample Cohen's d of two scalar samples.
pub fn d_two_sample_scalar(y0: &[f64], y1: &[f64]) -> Result<f64> {
    let y0 = DMatrix::from_column_slice(y0.len(), 1, y0);
    let y1 = DMatrix::from_column_slice(y1.len(), 1, y1);
    Ok(d_two_sample(&y0, &y1)?[0])
}

/// Residuals of a one-sample model: each column minus its mean.
pub fn residuals_one_sample(y: &DMatrix<f64>) -> DMatrix<f64> {
    let mut r = y.clone();
    for mut col in r.column_iter_mut() {
        let mean = col.mean();
        col.add_scalar_mut(-mean);
    }
    r
}

/// Residuals of a two-sample model: each group minus its own column means,
/// stacked as `[y0; y1]`.
///
/// # Errors
///
/// `ShapeMismatch` if the groups have different column counts.
pub fn residuals_two_sample(y0: &DMatrix<f64>, y1: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    if y0.ncols() != y1.ncols() {
        return Err(Error::ShapeMismatch {
            expected: y0.ncols(),
            actual: y1.ncols(),
        });
    }
    let r0 = residuals_one_sample(y0);
    let r1 = residuals_one_sample(y1);
    let n0 = r0.nrows();
    Ok(DMatrix::from_fn(n0 + r1.nrows(), r0.ncols(), |i, j| {
        if i < n0 {
            r0[(i, j)]
        } else {
            r1[(i - n0, j)]
        }
    }))
}
