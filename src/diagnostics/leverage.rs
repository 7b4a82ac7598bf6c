//! Leverage (hat matrix diagonal) calculations.

use faer::Mat;

/// Leverage of a single design row: x'(X'X)⁻¹x.
fn single_leverage(design: &Mat<f64>, row: usize, xtx_inv: &Mat<f64>) -> f64 {
    let p = design.ncols();
    let mut h_ii = 0.0;

    for j in 0..p {
        for k in 0..p {
            h_ii += design[(row, j)] * xtx_inv[(j, k)] * design[(row, k)];
        }
    }

    h_ii.clamp(0.0, 1.0)
}

/// Compute leverage values (diagonal of hat matrix H = X(X'X)⁻¹X').
///
/// `design` is the fitted design matrix, including the ones column when the
/// model has an intercept, and `xtx_inv` its (X'X)⁻¹.
///
/// # Properties
/// - h_ii ∈ [0, 1]
/// - Σ h_ii = k (number of parameters)
/// - Points with h_ii > 2k/n are considered high leverage
pub fn compute_leverage(design: &Mat<f64>, xtx_inv: &Mat<f64>) -> Vec<f64> {
    (0..design.nrows())
        .map(|i| single_leverage(design, i, xtx_inv))
        .collect()
}

/// Identify high leverage points.
///
/// Returns indices of observations with leverage > threshold.
/// Default threshold is 2k/n where k is the number of parameters.
pub fn high_leverage_points(leverage: &[f64], n_params: usize, threshold: Option<f64>) -> Vec<usize> {
    let n = leverage.len();
    let cutoff = threshold.unwrap_or(2.0 * n_params as f64 / n as f64);

    leverage
        .iter()
        .enumerate()
        .filter(|(_, &h)| h > cutoff)
        .map(|(i, _)| i)
        .collect()
}
