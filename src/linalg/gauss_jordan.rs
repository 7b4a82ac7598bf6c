//! Gauss-Jordan elimination with partial pivoting.

use crate::core::RegressionError;
use faer::Mat;

/// Pivot threshold for `m`: `tolerance` scaled by its largest absolute entry.
fn pivot_threshold(m: &Mat<f64>, tolerance: f64) -> f64 {
    let mut max_abs: f64 = 1.0;
    for j in 0..m.ncols() {
        for i in 0..m.nrows() {
            max_abs = max_abs.max(m[(i, j)].abs());
        }
    }
    tolerance * max_abs
}

/// Index of the row at or below `col` with the largest magnitude in `col`.
fn pivot_row(a: &Mat<f64>, col: usize) -> usize {
    let mut best = col;
    for i in (col + 1)..a.nrows() {
        if a[(i, col)].abs() > a[(best, col)].abs() {
            best = i;
        }
    }
    best
}

fn swap_rows(a: &mut Mat<f64>, r1: usize, r2: usize) {
    if r1 == r2 {
        return;
    }
    for j in 0..a.ncols() {
        let tmp = a[(r1, j)];
        a[(r1, j)] = a[(r2, j)];
        a[(r2, j)] = tmp;
    }
}

/// Invert a square matrix.
///
/// Reduces the augmented matrix [M | I] to [I | M⁻¹], choosing as pivot the
/// row with the largest absolute value in the current column. A pivot whose
/// magnitude falls below `tolerance · max(1, max|mᵢⱼ|)` is treated as zero.
///
/// # Errors
/// - `Shape` if `m` is not square
/// - `SingularMatrix` if a pivot is below the threshold
pub fn invert(m: &Mat<f64>, tolerance: f64) -> Result<Mat<f64>, RegressionError> {
    let n = m.nrows();
    if m.ncols() != n {
        return Err(RegressionError::shape(
            "invert",
            (m.nrows(), m.ncols()),
            (m.ncols(), m.ncols()),
        ));
    }

    let threshold = pivot_threshold(m, tolerance);
    let mut aug = Mat::from_fn(n, 2 * n, |i, j| {
        if j < n {
            m[(i, j)]
        } else if j - n == i {
            1.0
        } else {
            0.0
        }
    });

    for col in 0..n {
        let p = pivot_row(&aug, col);
        let pivot = aug[(p, col)];
        if pivot.abs() < threshold || !pivot.is_finite() {
            return Err(RegressionError::SingularMatrix { column: col, pivot });
        }
        swap_rows(&mut aug, col, p);

        for j in 0..2 * n {
            aug[(col, j)] /= pivot;
        }

        for i in 0..n {
            if i == col {
                continue;
            }
            let factor = aug[(i, col)];
            if factor == 0.0 {
                continue;
            }
            for j in 0..2 * n {
                aug[(i, j)] -= factor * aug[(col, j)];
            }
        }
    }

    Ok(Mat::from_fn(n, n, |i, j| aug[(i, j + n)]))
}

/// Determinant of a square matrix by Gaussian elimination.
///
/// Returns exactly 0.0 when a column has no non-zero pivot.
pub fn determinant(m: &Mat<f64>) -> Result<f64, RegressionError> {
    let n = m.nrows();
    if m.ncols() != n {
        return Err(RegressionError::shape(
            "determinant",
            (m.nrows(), m.ncols()),
            (m.ncols(), m.ncols()),
        ));
    }

    let mut a = m.clone();
    let mut det = 1.0;

    for col in 0..n {
        let p = pivot_row(&a, col);
        let pivot = a[(p, col)];
        if pivot == 0.0 {
            return Ok(0.0);
        }
        if p != col {
            swap_rows(&mut a, col, p);
            det = -det;
        }
        det *= pivot;

        for i in (col + 1)..n {
            let factor = a[(i, col)] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in col..n {
                a[(i, j)] -= factor * a[(col, j)];
            }
        }
    }

    Ok(det)
}
