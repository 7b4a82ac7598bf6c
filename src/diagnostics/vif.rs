//! Variance Inflation Factor (VIF) for multicollinearity detection.

use crate::inference::SumsOfSquares;
use crate::linalg::{drop_column, with_intercept_column};
use crate::solvers::estimate;
use faer::{Col, Mat};

/// R² at or above this is treated as an exact linear dependence.
const PERFECT_FIT_R_SQUARED: f64 = 1.0 - 1e-14;

/// Compute the Variance Inflation Factor for each design column.
///
/// For predictor j:
///
/// VIF_j = 1 / (1 − R²_j)
///
/// where R²_j comes from regressing x_j on all other predictors plus an
/// intercept. `x` holds the predictor columns only. With `intercept_slot` the
/// returned vector is aligned with a design matrix that has a leading ones
/// column, whose VIF is undefined (NaN).
///
/// # Interpretation
/// - VIF = 1: No correlation with other predictors
/// - VIF > 5: Moderate multicollinearity (some sources say > 10)
/// - VIF = ∞: The predictor is an exact linear combination of the others
///
/// A single predictor has VIF 1. If an auxiliary regression is itself
/// singular, that entry is NaN.
pub fn variance_inflation_factor(x: &Mat<f64>, intercept_slot: bool, tolerance: f64) -> Vec<f64> {
    let n = x.nrows();
    let p = x.ncols();

    let mut vif = Vec::with_capacity(p + usize::from(intercept_slot));
    if intercept_slot {
        vif.push(f64::NAN);
    }

    if p < 2 {
        vif.extend(std::iter::repeat(1.0).take(p));
        return vif;
    }

    for j in 0..p {
        let design = with_intercept_column(&drop_column(x, j));
        let y_j = Col::from_fn(n, |i| x[(i, j)]);

        let value = match estimate(&design, &y_j, tolerance) {
            Ok(est) => {
                let r_squared =
                    SumsOfSquares::compute(&y_j, &est.fitted_values, &est.residuals, true)
                        .r_squared();
                if r_squared < PERFECT_FIT_R_SQUARED {
                    (1.0 / (1.0 - r_squared)).max(1.0)
                } else {
                    f64::INFINITY
                }
            }
            Err(err) => {
                log::warn!("VIF auxiliary regression for predictor {} failed: {}", j, err);
                f64::NAN
            }
        };
        vif.push(value);
    }

    vif
}

/// Identify predictors with high multicollinearity.
///
/// Returns indices of entries with VIF > threshold. NaN entries are never
/// reported. Common threshold: 5 or 10.
pub fn high_vif_predictors(vif: &[f64], threshold: f64) -> Vec<usize> {
    vif.iter()
        .enumerate()
        .filter(|(_, &v)| v > threshold)
        .map(|(i, _)| i)
        .collect()
}
