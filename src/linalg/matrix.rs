//! Matrix utility functions.

use crate::core::RegressionError;
use faer::{Col, Mat, Side};

/// Transpose of `m`.
pub fn transpose(m: &Mat<f64>) -> Mat<f64> {
    m.transpose().to_owned()
}

/// Matrix product `a · b`.
///
/// # Errors
/// `Shape` when `a.ncols() != b.nrows()`.
pub fn multiply(a: &Mat<f64>, b: &Mat<f64>) -> Result<Mat<f64>, RegressionError> {
    if a.ncols() != b.nrows() {
        return Err(RegressionError::shape(
            "multiply",
            (a.nrows(), a.ncols()),
            (b.nrows(), b.ncols()),
        ));
    }
    Ok(a * b)
}

/// Matrix-vector product `a · v`.
pub fn multiply_vec(a: &Mat<f64>, v: &Col<f64>) -> Result<Col<f64>, RegressionError> {
    if a.ncols() != v.nrows() {
        return Err(RegressionError::shape(
            "multiply_vec",
            (a.nrows(), a.ncols()),
            (v.nrows(), 1),
        ));
    }
    Ok(a * v)
}

/// Cross-product matrix X'X.
pub fn gram(x: &Mat<f64>) -> Mat<f64> {
    x.transpose() * x
}

/// Prepend a column of ones to `x`.
pub fn with_intercept_column(x: &Mat<f64>) -> Mat<f64> {
    Mat::from_fn(x.nrows(), x.ncols() + 1, |i, j| {
        if j == 0 {
            1.0
        } else {
            x[(i, j - 1)]
        }
    })
}

/// Copy of `x` without column `skip`.
pub fn drop_column(x: &Mat<f64>, skip: usize) -> Mat<f64> {
    Mat::from_fn(x.nrows(), x.ncols().saturating_sub(1), |i, j| {
        if j < skip {
            x[(i, j)]
        } else {
            x[(i, j + 1)]
        }
    })
}

/// Spectral condition number λ_max / λ_min of a symmetric matrix.
///
/// Returns `+∞` when the smallest eigenvalue is not positive and NaN when the
/// eigendecomposition fails or the matrix is empty.
pub fn condition_number(m: &Mat<f64>) -> f64 {
    if m.nrows() == 0 || m.nrows() != m.ncols() {
        return f64::NAN;
    }

    let eigenvalues = match m.self_adjoint_eigenvalues(Side::Lower) {
        Ok(values) => values,
        Err(_) => return f64::NAN,
    };

    let max = eigenvalues.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = eigenvalues.iter().cloned().fold(f64::INFINITY, f64::min);

    if min <= 0.0 {
        f64::INFINITY
    } else {
        max / min
    }
}
