//! Confidence and prediction intervals for new observations.

use crate::core::{IntervalType, PredictionResult};
use crate::distributions::t_critical;
use faer::Mat;

/// Interval bounds for predictions at new design rows.
///
/// `design_new` must have the same columns as the fitted design matrix
/// (including the leading ones column when the model has an intercept), and
/// `xtx_inverse` is (X'X)⁻¹ of the fitted design.
///
/// For a row x₀ the standard error of the mean response is
/// `sqrt(mse · x₀'(X'X)⁻¹x₀)`; prediction intervals add `mse` under the root.
pub fn compute_prediction_intervals(
    design_new: &Mat<f64>,
    xtx_inverse: &Mat<f64>,
    predictions: Vec<f64>,
    mse: f64,
    df: f64,
    alpha: f64,
    interval_type: IntervalType,
) -> PredictionResult {
    let n_new = design_new.nrows();
    let p = design_new.ncols();

    if df <= 0.0 || !mse.is_finite() || mse < 0.0 {
        return PredictionResult {
            fit: predictions,
            lower: vec![f64::NAN; n_new],
            upper: vec![f64::NAN; n_new],
            se_fit: vec![f64::NAN; n_new],
            interval: Some(interval_type),
        };
    }

    let t_crit = t_critical(alpha, df);

    let mut se_fit = Vec::with_capacity(n_new);
    let mut lower = Vec::with_capacity(n_new);
    let mut upper = Vec::with_capacity(n_new);

    for i in 0..n_new {
        let mut quad = 0.0;
        for j in 0..p {
            for k in 0..p {
                quad += design_new[(i, j)] * xtx_inverse[(j, k)] * design_new[(i, k)];
            }
        }

        let var_fit = (mse * quad).max(0.0);
        let se = var_fit.sqrt();
        let half_width = match interval_type {
            IntervalType::Confidence => t_crit * se,
            IntervalType::Prediction => t_crit * (mse + var_fit).sqrt(),
        };

        se_fit.push(se);
        lower.push(predictions[i] - half_width);
        upper.push(predictions[i] + half_width);
    }

    PredictionResult {
        fit: predictions,
        lower,
        upper,
        se_fit,
        interval: Some(interval_type),
    }
}
